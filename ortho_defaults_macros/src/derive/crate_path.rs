//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[defaults(crate = "...")]` attribute value into
//! the path generated code uses to reach the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `ortho_defaults` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ortho_defaults }, |path| quote! { #path })
}
