//! Emitter for named-field structs.

use proc_macro2::TokenStream;
use quote::quote;

use super::ImplContext;
use crate::derive::parse::{FieldInfo, FieldSpec, type_label};

/// Builds the `FieldDescriptor` constructor for one field.
pub(super) fn descriptor(krate: &TokenStream, field: &FieldInfo) -> TokenStream {
    let ident = field.ident.to_string();
    let name = ident.trim_start_matches("r#");
    let key = &field.key;
    let ty = &field.ty;
    let label = type_label(ty);
    let spec = match &field.spec {
        FieldSpec::Absent => quote! { #krate::Spec::Absent },
        FieldSpec::Skip => quote! { #krate::Spec::Skip },
        FieldSpec::Literal(lit) => quote! { #krate::Spec::Literal(#lit) },
    };
    quote! {
        #krate::FieldDescriptor::new(
            #name,
            #key,
            #label,
            <#ty as #krate::DefaultValue>::KIND,
            #spec,
        )
    }
}

pub(super) fn generate(ctx: &ImplContext<'_>, fields: &[FieldInfo], hook: bool) -> TokenStream {
    let krate = &ctx.krate;
    let idents: Vec<_> = fields.iter().map(|field| &field.ident).collect();
    let descriptors: Vec<_> = fields.iter().map(|field| descriptor(krate, field)).collect();

    let is_zero = if idents.is_empty() {
        quote! { true }
    } else {
        quote! { #( #krate::IsZero::is_zero(&self.#idents) )&&* }
    };
    // An empty object parameter would otherwise be unused.
    let object = if idents.is_empty() {
        quote! { _object }
    } else {
        quote! { object }
    };
    let run_hook = hook.then(|| {
        quote! {
            fn run_hook(&mut self) {
                <Self as #krate::SetDefaults>::set_defaults(self);
            }
        }
    });

    let zero_header = ctx.header(&quote! { #krate::IsZero });
    let value_header = ctx.header(&quote! { #krate::DefaultValue });
    let defaults_header = ctx.header(&quote! { #krate::Defaults });

    quote! {
        #zero_header {
            fn is_zero(&self) -> bool {
                #is_zero
            }
        }

        #value_header {
            const KIND: #krate::Kind = #krate::Kind::Composite;

            fn parse_default(spec: &str) -> #krate::DefaultsResult<Self> {
                #krate::composite::parse_default::<Self>(spec)
            }

            fn from_literal(literal: &#krate::Literal) -> #krate::DefaultsResult<Self> {
                #krate::composite::from_literal::<Self>(literal)
            }

            fn descend(&mut self) -> #krate::DefaultsResult<()> {
                #krate::composite::apply(self)
            }

            fn fill_unset(&mut self) -> #krate::DefaultsResult<()> {
                #krate::composite::apply(self)
            }
        }

        #defaults_header {
            const FIELDS: &'static [#krate::FieldDescriptor] = &[ #( #descriptors ),* ];
            const HOOK: bool = #hook;

            fn walk_fields(&mut self) -> #krate::DefaultsResult<()> {
                #( #krate::walk::apply_field(&mut self.#idents, &#descriptors)?; )*
                ::core::result::Result::Ok(())
            }

            fn decode_fields(
                &mut self,
                #object: &#krate::LiteralObject,
            ) -> #krate::DefaultsResult<()> {
                #( #krate::composite::decode_field(#object, &mut self.#idents, &#descriptors)?; )*
                ::core::result::Result::Ok(())
            }

            #run_hook
        }
    }
}
