//! Tests for serde attribute parsing helpers.

use super::super::serde_attrs::{SerdeRenameAll, serde_rename, serde_rename_all};
use anyhow::{Result, anyhow, bail, ensure};
use rstest::rstest;
use syn::{Attribute, parse_quote};

#[rstest]
#[case(parse_quote!(#[serde(rename_all = "PascalCase")]), SerdeRenameAll::Pascal)]
#[case(parse_quote!(#[serde(rename_all = "kebab-case")]), SerdeRenameAll::Kebab)]
#[case(parse_quote!(#[serde(deny_unknown_fields, rename_all = "camelCase")]), SerdeRenameAll::Camel)]
#[case(
    parse_quote!(#[serde(rename_all(serialize = "lowercase", deserialize = "SCREAMING_SNAKE_CASE"))]),
    SerdeRenameAll::ScreamingSnake
)]
fn reads_rename_all(#[case] attr: Attribute, #[case] expected: SerdeRenameAll) -> Result<()> {
    let parsed = serde_rename_all(&[attr]).map_err(|err| anyhow!(err))?;
    ensure!(parsed == Some(expected), "got {parsed:?}");
    Ok(())
}

#[test]
fn rejects_unknown_rename_rule() -> Result<()> {
    let attr: Attribute = parse_quote!(#[serde(rename_all = "Title Case")]);
    let Err(err) = serde_rename_all(&[attr]) else {
        bail!("unsupported rule should be rejected");
    };
    ensure!(
        err.to_string().contains("unsupported serde rename_all value"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
#[case(parse_quote!(#[serde(rename = "Key")]), Some("Key"))]
#[case(parse_quote!(#[serde(rename(serialize = "out", deserialize = "in"))]), Some("in"))]
#[case(parse_quote!(#[serde(rename(serialize = "out"))]), None)]
#[case(parse_quote!(#[serde(default, skip_serializing_if = "Option::is_none")]), None)]
fn reads_deserialize_rename(#[case] attr: Attribute, #[case] expected: Option<&str>) -> Result<()> {
    let parsed = serde_rename(&[attr]).map_err(|err| anyhow!(err))?;
    ensure!(parsed.as_deref() == expected, "got {parsed:?}");
    Ok(())
}

#[rstest]
#[case(SerdeRenameAll::Pascal, "hello_world", "HelloWorld")]
#[case(SerdeRenameAll::Camel, "hello_world", "helloWorld")]
#[case(SerdeRenameAll::ScreamingSnake, "hello_world", "HELLO_WORLD")]
#[case(SerdeRenameAll::Kebab, "hello_world", "hello-world")]
#[case(SerdeRenameAll::Lower, "Female", "female")]
#[case(SerdeRenameAll::Snake, "NotSpecified", "not_specified")]
fn applies_rename_rules(
    #[case] rule: SerdeRenameAll,
    #[case] name: &str,
    #[case] expected: &str,
) -> Result<()> {
    let renamed = rule.apply(name);
    ensure!(renamed == expected, "expected {expected}, got {renamed}");
    Ok(())
}

#[test]
fn keys_after_discarded_values_are_still_read() -> Result<()> {
    let attr: Attribute = parse_quote!(#[serde(default = "fallback", rename_all = "camelCase")]);
    let parsed = serde_rename_all(&[attr]).map_err(|err| anyhow!(err))?;
    ensure!(parsed == Some(SerdeRenameAll::Camel), "got {parsed:?}");
    Ok(())
}
