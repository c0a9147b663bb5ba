//! Procedural macros for `ortho_defaults`.
//!
//! `#[derive(Defaults)]` generates the schema the runtime walker needs:
//! field descriptors carrying each field's default specification, slot
//! accessors for walking and literal decoding, the zero test, and the
//! dispatch to an optional override hook.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `ortho_defaults::Defaults`.
///
/// Supported shapes:
///
/// - structs with named fields (and unit structs) become composites;
/// - single-field tuple structs become transparent newtypes, which is how
///   enumerated text such as `struct Gender(String)` is modelled;
/// - enums with only unit variants parse from their variant names and
///   treat the `#[default]` variant as zero.
///
/// Field attributes:
///
/// - `#[defaults(value = "...")]` attaches a default specification;
///   `value = "-"` is the skip marker;
/// - `#[defaults(skip)]` opts the field out of defaulting and recursion;
/// - `#[defaults(rename = "...")]` sets the key used in structured
///   literals. `#[serde(rename)]` and `#[serde(rename_all)]` are honoured
///   when no explicit rename is given.
///
/// Struct attributes:
///
/// - `#[defaults(hook)]` runs `SetDefaults::set_defaults` after the
///   declarative defaults;
/// - `#[defaults(crate = "path")]` points generated code at a renamed
///   dependency.
#[proc_macro_derive(Defaults, attributes(defaults, serde))]
pub fn derive_defaults(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
