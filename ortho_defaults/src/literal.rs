//! Structured-literal syntax used inside default specifications.
//!
//! Sequences, mappings and composites are written as JSON-style literals
//! (`[1, 2]`, `{"key": {"Foo": 1}}`). The text is parsed into a
//! [`Literal`] tree which the type-directed decoders in [`crate::value`]
//! and [`crate::composite`] then walk. Only keys present in an object
//! literal are decoded, so omitted fields stay zero for the walker.

use crate::error::{DefaultsError, DefaultsResult, ValueError};

/// Parsed structured literal.
pub type Literal = serde_json::Value;

/// Object node of a [`Literal`].
pub type LiteralObject = serde_json::Map<String, Literal>;

/// Parses `spec` as a structured literal for a value of type `T`.
///
/// # Errors
///
/// Returns [`ValueError::Syntax`] when the text is not a valid literal.
pub fn parse<T: ?Sized>(spec: &str) -> DefaultsResult<Literal> {
    serde_json::from_str(spec)
        .map_err(|err| DefaultsError::parse::<T>(spec, ValueError::Syntax(err)))
}

/// Names the shape of a literal node for diagnostics.
#[must_use]
pub const fn shape(literal: &Literal) -> &'static str {
    match literal {
        Literal::Null => "null",
        Literal::Bool(_) => "boolean",
        Literal::Number(_) => "number",
        Literal::String(_) => "string",
        Literal::Array(_) => "array",
        Literal::Object(_) => "object",
    }
}

/// Builds a shape-mismatch error for `T`.
#[must_use]
pub fn mismatch<T: ?Sized>(literal: &Literal, expected: &'static str) -> DefaultsError {
    DefaultsError::parse::<T>(
        literal.to_string(),
        ValueError::Mismatch {
            expected,
            found: shape(literal),
        },
    )
}

/// Returns the elements of an array literal.
///
/// # Errors
///
/// Returns a mismatch error for any other shape.
pub fn expect_array<T: ?Sized>(literal: &Literal) -> DefaultsResult<&[Literal]> {
    literal
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch::<T>(literal, "array"))
}

/// Returns the entries of an object literal.
///
/// # Errors
///
/// Returns a mismatch error for any other shape.
pub fn expect_object<T: ?Sized>(literal: &Literal) -> DefaultsResult<&LiteralObject> {
    literal
        .as_object()
        .ok_or_else(|| mismatch::<T>(literal, "object"))
}

/// Returns the text of a string literal.
///
/// # Errors
///
/// Returns a mismatch error for any other shape.
pub fn expect_str<T: ?Sized>(literal: &Literal) -> DefaultsResult<&str> {
    literal
        .as_str()
        .ok_or_else(|| mismatch::<T>(literal, "string"))
}

/// Looks up `key` in an object literal.
///
/// An exact match wins; otherwise the first key equal under ASCII case
/// folding is used, so `{"foo": 1}` still reaches a field keyed `Foo`.
#[must_use]
pub fn lookup<'a>(object: &'a LiteralObject, key: &str) -> Option<&'a Literal> {
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, bail, ensure};
    use rstest::rstest;

    #[rstest]
    #[case("null", "null")]
    #[case("true", "boolean")]
    #[case("1.5", "number")]
    #[case("\"x\"", "string")]
    #[case("[1, 2]", "array")]
    #[case("{\"a\": 1}", "object")]
    fn parses_literal_shapes(#[case] text: &str, #[case] expected: &str) -> Result<()> {
        let literal = parse::<()>(text).map_err(|err| anyhow!(err))?;
        ensure!(shape(&literal) == expected, "unexpected shape for {text}");
        Ok(())
    }

    #[test]
    fn malformed_literal_reports_syntax() -> Result<()> {
        let Err(err) = parse::<Vec<u8>>("[1, 2") else {
            bail!("unterminated array should be rejected");
        };
        ensure!(matches!(err.reason(), Some(ValueError::Syntax(_))), "{err}");
        ensure!(err.spec() == Some("[1, 2"), "spec not recorded: {err}");
        ensure!(err.type_name() == "Vec<u8>", "type not recorded: {err}");
        Ok(())
    }

    #[test]
    fn expect_array_rejects_objects() -> Result<()> {
        let literal = serde_json::json!({"a": 1});
        let Err(err) = expect_array::<Vec<u8>>(&literal) else {
            bail!("object is not an array");
        };
        ensure!(
            matches!(
                err.reason(),
                Some(ValueError::Mismatch {
                    expected: "array",
                    found: "object"
                })
            ),
            "unexpected error: {err}"
        );
        Ok(())
    }

    #[rstest]
    #[case("Foo", Some(1))]
    #[case("foo", Some(2))]
    #[case("FOO", Some(1))]
    #[case("bar", None)]
    fn lookup_prefers_exact_then_folded(
        #[case] key: &str,
        #[case] expected: Option<i64>,
    ) -> Result<()> {
        let literal = serde_json::json!({"Foo": 1, "foo": 2});
        let object = literal
            .as_object()
            .ok_or_else(|| anyhow!("expected object literal"))?;
        let found = lookup(object, key).and_then(Literal::as_i64);
        ensure!(found == expected, "lookup({key}) gave {found:?}");
        Ok(())
    }
}
