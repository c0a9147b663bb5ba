//! Emitter for single-field tuple structs.
//!
//! The newtype takes its inner type's kind, zero test and parsing, so
//! `struct Gender(String)` behaves exactly like a `String` field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::ImplContext;

pub(super) fn generate(ctx: &ImplContext<'_>, inner: &Type) -> TokenStream {
    let krate = &ctx.krate;
    let zero_header = ctx.header(&quote! { #krate::IsZero });
    let value_header = ctx.header(&quote! { #krate::DefaultValue });
    let inner_value = quote! { <#inner as #krate::DefaultValue> };

    quote! {
        #zero_header {
            fn is_zero(&self) -> bool {
                #krate::IsZero::is_zero(&self.0)
            }
        }

        #value_header {
            const KIND: #krate::Kind = #inner_value::KIND;

            fn parse_default(spec: &str) -> #krate::DefaultsResult<Self> {
                #inner_value::parse_default(spec).map(Self)
            }

            fn from_literal(literal: &#krate::Literal) -> #krate::DefaultsResult<Self> {
                #inner_value::from_literal(literal).map(Self)
            }

            fn descend(&mut self) -> #krate::DefaultsResult<()> {
                #inner_value::descend(&mut self.0)
            }

            fn fill_unset(&mut self) -> #krate::DefaultsResult<()> {
                #inner_value::fill_unset(&mut self.0)
            }
        }
    }
}
