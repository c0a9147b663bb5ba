//! Parsing utilities for the `Defaults` derive macro.
//!
//! Attribute parsing is strict: an unknown key inside `#[defaults(...)]`
//! is a compile error, since a misspelt `value` would otherwise drop a
//! default without any sign.

use syn::parenthesized;
use syn::{Attribute, LitStr, Token};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{DefaultsInput, FieldInfo, Shape, VariantInfo, parse_input};
use literals::{lit_bool, lit_str};
use serde_attrs::{SerdeRenameAll, serde_rename, serde_rename_all};
pub(crate) use type_utils::type_label;

/// Marker reserved for skipping a field.
const SKIP_MARKER: &str = "-";

/// Container-level `#[defaults(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Run `SetDefaults::set_defaults` after declarative defaults.
    pub hook: bool,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
    /// Serde renaming rule applied to field or variant names.
    pub rename_all: Option<SerdeRenameAll>,
}

/// Default specification written on a field.
#[derive(Default, Clone)]
pub(crate) enum FieldSpec {
    #[default]
    Absent,
    Skip,
    Literal(LitStr),
}

/// Field- and variant-level `#[defaults(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub spec: FieldSpec,
    pub rename: Option<String>,
}

impl FieldAttrs {
    /// Whether any attribute was written.
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self.spec, FieldSpec::Absent) && self.rename.is_none()
    }
}

/// Iterate all `#[defaults(...)]` attributes once and apply a callback.
fn parse_defaults<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("defaults")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
///
/// Used for foreign attributes such as `#[serde(...)]`, where only a few
/// keys are of interest. Only the value expression is consumed so that
/// later keys in the same list are still visited.
pub(crate) fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

fn key_of(meta: &syn::meta::ParseNestedMeta) -> String {
    meta.path
        .get_ident()
        .map_or_else(String::new, ToString::to_string)
}

/// Extracts container attributes, including serde's `rename_all`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs {
        rename_all: serde_rename_all(attrs)?,
        ..StructAttrs::default()
    };
    parse_defaults(attrs, |meta| match key_of(meta).as_str() {
        "hook" => {
            // Accept both `hook` and `hook = true`.
            out.hook = if meta.input.peek(Token![=]) {
                lit_bool(meta, "hook")?
            } else {
                true
            };
            Ok(())
        }
        "crate" => {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        }
        other => Err(meta.error(format!(
            "unknown defaults attribute `{other}`; expected `hook` or `crate`"
        ))),
    })?;
    Ok(out)
}

/// Parses field- or variant-level `#[defaults(...)]` attributes.
///
/// `value = "-"` is folded into [`FieldSpec::Skip`]; combining `value` with
/// `skip` is rejected.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut value: Option<LitStr> = None;
    let mut skip = false;
    let mut explicit_rename = None;
    parse_defaults(attrs, |meta| match key_of(meta).as_str() {
        "value" => {
            value = Some(lit_str(meta, "value")?);
            Ok(())
        }
        "skip" => {
            skip = true;
            Ok(())
        }
        "rename" => {
            explicit_rename = Some(lit_str(meta, "rename")?.value());
            Ok(())
        }
        other => Err(meta.error(format!(
            "unknown defaults attribute `{other}`; expected `value`, `skip`, or `rename`"
        ))),
    })?;

    let spec = match (value, skip) {
        (Some(lit), true) => {
            return Err(syn::Error::new(
                lit.span(),
                "`value` and `skip` cannot be combined",
            ));
        }
        (Some(lit), false) if lit.value() == SKIP_MARKER => FieldSpec::Skip,
        (Some(lit), false) => FieldSpec::Literal(lit),
        (None, true) => FieldSpec::Skip,
        (None, false) => FieldSpec::Absent,
    };
    let rename = explicit_rename.map_or_else(|| serde_rename(attrs), |name| Ok(Some(name)))?;
    Ok(FieldAttrs { spec, rename })
}

/// Computes the literal key for a field or variant name.
pub(crate) fn literal_key(
    name: &str,
    attrs: &FieldAttrs,
    rename_all: Option<SerdeRenameAll>,
) -> String {
    attrs.rename.clone().unwrap_or_else(|| {
        rename_all.map_or_else(|| name.to_owned(), |rule| rule.apply(name))
    })
}
