//! Shape detection for the annotated item.

use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use super::{FieldSpec, StructAttrs, literal_key, parse_field_attrs, parse_struct_attrs};

/// Parsed form of an item deriving `Defaults`.
pub(crate) struct DefaultsInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub shape: Shape,
}

/// The three item shapes the derive supports.
pub(crate) enum Shape {
    /// Named-field or unit struct.
    Composite(Vec<FieldInfo>),
    /// Single-field tuple struct that defers to its inner type.
    Newtype(Box<Type>),
    /// Unit-only enum; `zero` is its `#[default]` variant.
    Enumeration {
        variants: Vec<VariantInfo>,
        zero: Ident,
    },
}

/// A named field of a composite.
pub(crate) struct FieldInfo {
    pub ident: Ident,
    pub ty: Type,
    /// Key used to look the field up in object literals.
    pub key: String,
    pub spec: FieldSpec,
}

/// A unit variant and the token that selects it.
pub(crate) struct VariantInfo {
    pub ident: Ident,
    pub name: String,
}

/// Parses the derive input into a [`DefaultsInput`].
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<DefaultsInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let shape = match &input.data {
        Data::Struct(data) => struct_shape(&input.ident, &data.fields, &attrs)?,
        Data::Enum(data) => {
            if attrs.hook {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "`hook` is only supported on structs with named fields",
                ));
            }
            enum_shape(&input.ident, data, &attrs)?
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Defaults cannot be derived for unions",
            ));
        }
    };
    Ok(DefaultsInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        shape,
    })
}

fn struct_shape(ident: &Ident, fields: &Fields, attrs: &StructAttrs) -> syn::Result<Shape> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| -> syn::Result<FieldInfo> {
                let field_ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
                let field_attrs = parse_field_attrs(&field.attrs)?;
                let name = field_ident.to_string();
                let key = literal_key(
                    name.trim_start_matches("r#"),
                    &field_attrs,
                    attrs.rename_all,
                );
                Ok(FieldInfo {
                    ident: field_ident,
                    ty: field.ty.clone(),
                    key,
                    spec: field_attrs.spec,
                })
            })
            .collect::<syn::Result<Vec<_>>>()
            .map(Shape::Composite),
        Fields::Unit => Ok(Shape::Composite(Vec::new())),
        Fields::Unnamed(unnamed) => {
            let mut iter = unnamed.unnamed.iter();
            let (Some(inner), None) = (iter.next(), iter.next()) else {
                return Err(syn::Error::new_spanned(
                    ident,
                    "tuple structs must have exactly one field to derive Defaults",
                ));
            };
            if attrs.hook {
                return Err(syn::Error::new_spanned(
                    ident,
                    "`hook` is only supported on structs with named fields",
                ));
            }
            if !parse_field_attrs(&inner.attrs)?.is_empty() {
                return Err(syn::Error::new_spanned(
                    inner,
                    "newtype fields take no defaults attributes; annotate the enclosing field",
                ));
            }
            Ok(Shape::Newtype(Box::new(inner.ty.clone())))
        }
    }
}

fn enum_shape(ident: &Ident, data: &syn::DataEnum, attrs: &StructAttrs) -> syn::Result<Shape> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "Defaults cannot be derived for enums without variants",
        ));
    }
    let mut zero = None;
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Defaults only supports enums whose variants are all unit variants",
            ));
        }
        let variant_attrs = parse_field_attrs(&variant.attrs)?;
        if !matches!(variant_attrs.spec, FieldSpec::Absent) {
            return Err(syn::Error::new_spanned(variant, "variants accept only `rename`"));
        }
        if variant.attrs.iter().any(|attr| attr.path().is_ident("default")) {
            zero = Some(variant.ident.clone());
        }
        variants.push(VariantInfo {
            ident: variant.ident.clone(),
            name: literal_key(&variant.ident.to_string(), &variant_attrs, attrs.rename_all),
        });
    }
    let zero = zero.ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "mark the zero variant with `#[default]` and derive `Default`",
        )
    })?;
    Ok(Shape::Enumeration { variants, zero })
}
