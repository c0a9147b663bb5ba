//! Code generation for `#[derive(Defaults)]`.
//!
//! Each item shape has its own emitter. All of them implement
//! `IsZero` and `DefaultValue`; composites also implement `Defaults`.

mod composite;
mod enumeration;
mod newtype;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, parse_quote};

use super::crate_path;
use super::parse::{DefaultsInput, Shape};

/// Shared pieces every emitter needs.
pub(crate) struct ImplContext<'a> {
    pub ident: &'a Ident,
    pub generics: Generics,
    pub krate: TokenStream,
}

impl ImplContext<'_> {
    /// Renders the `impl<...> Trait for Type<...> where ...` header.
    fn header(&self, trait_path: &TokenStream) -> TokenStream {
        let ident = self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        quote! { impl #impl_generics #trait_path for #ident #ty_generics #where_clause }
    }
}

/// Emits every trait implementation for the parsed item.
pub(crate) fn generate(input: &DefaultsInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ctx = ImplContext {
        ident: &input.ident,
        generics: bounded_generics(&input.generics, &krate),
        krate,
    };
    match &input.shape {
        Shape::Composite(fields) => composite::generate(&ctx, fields, input.attrs.hook),
        Shape::Newtype(inner) => newtype::generate(&ctx, inner),
        Shape::Enumeration { variants, zero } => enumeration::generate(&ctx, variants, zero),
    }
}

/// Requires every type parameter to be defaultable.
fn bounded_generics(generics: &Generics, krate: &TokenStream) -> Generics {
    let mut bounded = generics.clone();
    for param in &mut bounded.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(#krate::DefaultValue));
        }
    }
    bounded
}
