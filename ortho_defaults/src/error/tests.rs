//! Tests for error construction and path bookkeeping.

use anyhow::{Result, ensure};

use super::{DefaultsError, ValueError};
use crate::schema::{FieldDescriptor, Kind, Spec};

fn out_of_range<T>(spec: &str) -> DefaultsError {
    DefaultsError::parse::<T>(
        spec,
        ValueError::OutOfRange {
            value: spec.to_owned(),
        },
    )
}

#[test]
fn field_adopts_declared_type_and_raw_spec() -> Result<()> {
    let field = FieldDescriptor::new("age", "Age", "u8", Kind::Scalar, Spec::Literal(" 300 "));
    let err = out_of_range::<u8>("300").in_field(&field);
    ensure!(err.path() == Some("age"), "path: {err}");
    ensure!(err.spec() == Some(" 300 "), "spec: {err}");
    ensure!(err.type_name() == "u8", "type: {err}");
    ensure!(err.field_spec().is_none(), "own spec is not repeated: {err}");
    Ok(())
}

#[test]
fn nested_errors_keep_their_origin() -> Result<()> {
    let outer = FieldDescriptor::new(
        "inner",
        "Inner",
        "Inner",
        Kind::Composite,
        Spec::Literal(r#"{"count": 300}"#),
    );
    let err = out_of_range::<u8>("300").within("count").in_field(&outer);
    ensure!(err.path() == Some("inner.count"), "path: {err}");
    ensure!(err.spec() == Some("300"), "spec: {err}");
    ensure!(err.type_name() == "u8", "type: {err}");
    ensure!(
        err.field_spec() == Some(r#"{"count": 300}"#),
        "field spec: {err}"
    );
    Ok(())
}

#[test]
fn innermost_field_default_wins() -> Result<()> {
    let inner = FieldDescriptor::new("count", "count", "u8", Kind::Scalar, Spec::Absent);
    let middle = FieldDescriptor::new(
        "pool",
        "pool",
        "Pool",
        Kind::Composite,
        Spec::Literal(r#"{"count": 300}"#),
    );
    let outer = FieldDescriptor::new(
        "pools",
        "pools",
        "Vec<Pool>",
        Kind::Sequence,
        Spec::Literal("[{}]"),
    );
    let err = out_of_range::<u8>("300")
        .in_field(&inner)
        .in_field(&middle)
        .in_field(&outer);
    ensure!(err.path() == Some("pools.pool.count"), "path: {err}");
    ensure!(
        err.field_spec() == Some(r#"{"count": 300}"#),
        "field spec: {err}"
    );
    Ok(())
}

#[test]
fn display_names_the_enclosing_default() -> Result<()> {
    let field = FieldDescriptor::new(
        "leaves",
        "leaves",
        "Vec<u8>",
        Kind::Sequence,
        Spec::Literal("[300]"),
    );
    let message = out_of_range::<u8>("300")
        .at_index(0)
        .in_field(&field)
        .to_string();
    ensure!(
        message
            == r#"invalid default for `leaves[0]` of type `u8` from "300" in field default "[300]": 300 is out of range for the declared type"#,
        "unexpected message: {message}"
    );
    Ok(())
}

#[test]
fn element_segments_attach_without_dots() -> Result<()> {
    let err = out_of_range::<u8>("300")
        .within("count")
        .at_key("primary")
        .at_index(1)
        .within("pools");
    ensure!(
        err.path() == Some(r#"pools[1]["primary"].count"#),
        "path: {err}"
    );
    Ok(())
}

#[test]
fn display_names_path_type_and_spec() -> Result<()> {
    let field = FieldDescriptor::new("age", "age", "u8", Kind::Scalar, Spec::Literal("300"));
    let message = out_of_range::<u8>("300").in_field(&field).to_string();
    ensure!(
        message == r#"invalid default for `age` of type `u8` from "300": 300 is out of range for the declared type"#,
        "unexpected message: {message}"
    );
    Ok(())
}

#[test]
fn root_errors_display_a_root_marker() -> Result<()> {
    let message = out_of_range::<u8>("300").to_string();
    ensure!(message.contains("`<root>`"), "unexpected message: {message}");
    Ok(())
}

#[test]
fn invalid_target_ignores_paths() -> Result<()> {
    let err = DefaultsError::invalid_target::<Vec<String>>().within("outer");
    ensure!(err.path().is_none(), "invalid target has no path");
    ensure!(err.type_name() == "Vec<String>", "type: {err}");
    ensure!(
        err.to_string()
            == "defaults can only be applied to a struct deriving `Defaults`, not `Vec<String>`",
        "unexpected message: {err}"
    );
    Ok(())
}

#[test]
fn unknown_variant_lists_accepted_names() -> Result<()> {
    let err = DefaultsError::unknown_variant::<u8>("x", &["m", "f"]);
    ensure!(
        matches!(
            err.reason(),
            Some(ValueError::UnknownVariant { expected, .. }) if expected == "m, f"
        ),
        "{err}"
    );
    Ok(())
}
