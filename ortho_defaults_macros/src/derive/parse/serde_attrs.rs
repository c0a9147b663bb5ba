//! Serde attribute parsing helpers.
//!
//! Structured literals name composite fields and enum variants by the keys
//! serde would accept when deserializing, so the derive reads
//! `#[serde(rename = "...")]` and `#[serde(rename_all = "...")]` to compute
//! them. Only the deserialize side matters: literals are input.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

use super::discard_unknown;

/// Supported `#[serde(rename_all = "...")]` rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SerdeRenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl SerdeRenameAll {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported serde rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    /// Applies the rule to a field or variant identifier.
    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_ascii_lowercase(),
            Self::Upper => name.to_ascii_uppercase(),
            Self::Pascal => name.to_upper_camel_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Snake => name.to_snake_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::ScreamingKebab => name.to_shouty_kebab_case(),
        }
    }
}

/// Reads a name that serde accepts either as `key = "..."` or as
/// `key(serialize = "...", deserialize = "...")`, keeping the deserialize
/// form.
fn deserialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return meta.value()?.parse::<LitStr>().map(Some);
    }
    if !meta.input.peek(syn::token::Paren) {
        return Ok(None);
    }
    let mut out = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("deserialize") {
            out = Some(nested.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            discard_unknown(&nested)
        }
    })?;
    Ok(out)
}

/// Iterates every `#[serde(...)]` attribute, handing `key` entries to `f`
/// and discarding everything else.
fn scan_serde<F>(attrs: &[Attribute], key: &str, mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                f(&meta)
            } else {
                discard_unknown(&meta)
            }
        })?;
    }
    Ok(())
}

/// Parses `#[serde(rename_all = "...")]` from container attributes.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<SerdeRenameAll>> {
    let mut out = None;
    scan_serde(attrs, "rename_all", |meta| {
        if let Some(value) = deserialize_name(meta)? {
            out = Some(SerdeRenameAll::parse(&value)?);
        }
        Ok(())
    })?;
    Ok(out)
}

/// Parses `#[serde(rename = "...")]` from field or variant attributes.
pub(crate) fn serde_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut out = None;
    scan_serde(attrs, "rename", |meta| {
        if let Some(value) = deserialize_name(meta)? {
            out = Some(value.value());
        }
        Ok(())
    })?;
    Ok(out)
}
