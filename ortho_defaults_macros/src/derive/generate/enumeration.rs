//! Emitter for unit-only enums.
//!
//! Variants are selected by name (after any rename) and the `#[default]`
//! variant is the zero value, so it is the one a declarative default
//! replaces.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::ImplContext;
use crate::derive::parse::VariantInfo;

pub(super) fn generate(ctx: &ImplContext<'_>, variants: &[VariantInfo], zero: &Ident) -> TokenStream {
    let krate = &ctx.krate;
    let idents: Vec<_> = variants.iter().map(|variant| &variant.ident).collect();
    let names: Vec<_> = variants.iter().map(|variant| variant.name.as_str()).collect();
    let zero_header = ctx.header(&quote! { #krate::IsZero });
    let value_header = ctx.header(&quote! { #krate::DefaultValue });

    quote! {
        #zero_header {
            fn is_zero(&self) -> bool {
                ::core::matches!(self, Self::#zero)
            }
        }

        #value_header {
            const KIND: #krate::Kind = #krate::Kind::Scalar;

            fn parse_default(spec: &str) -> #krate::DefaultsResult<Self> {
                match spec.trim() {
                    #( #names => ::core::result::Result::Ok(Self::#idents), )*
                    other => ::core::result::Result::Err(
                        #krate::DefaultsError::unknown_variant::<Self>(other, &[ #( #names ),* ]),
                    ),
                }
            }

            fn from_literal(literal: &#krate::Literal) -> #krate::DefaultsResult<Self> {
                let token = #krate::literal::expect_str::<Self>(literal)?;
                <Self as #krate::DefaultValue>::parse_default(token)
            }
        }
    }
}
