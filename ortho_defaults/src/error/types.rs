//! Primary error enums for default application.

use thiserror::Error;

use super::helpers::{display_field_spec, display_path};

/// Errors that abort a call to [`crate::set`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DefaultsError {
    /// The value handed to [`crate::set`] is not a composite.
    #[error("defaults can only be applied to a struct deriving `Defaults`, not `{type_name}`")]
    InvalidTarget {
        /// Type of the rejected target.
        type_name: String,
    },

    /// A default specification could not be turned into the declared type.
    #[error(
        "invalid default for `{}` of type `{type_name}` from {spec:?}{}: {reason}",
        display_path(.path),
        display_field_spec(.field_spec.as_deref())
    )]
    DefaultParse {
        /// Dotted path of the failing field, with `[index]` and `["key"]`
        /// segments for collection elements.
        path: String,
        /// Declared type of the value that failed to parse.
        type_name: String,
        /// Offending specification text.
        spec: String,
        /// Raw default of the enclosing field when the failure sits inside
        /// its structured literal.
        field_spec: Option<String>,
        /// What went wrong.
        #[source]
        reason: Box<ValueError>,
    },
}

/// Reasons a specification string cannot produce a value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The structured literal is not well-formed.
    #[error("malformed structured literal: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The literal's shape does not match the declared type.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// Shape the declared type requires.
        expected: &'static str,
        /// Shape found in the literal.
        found: &'static str,
    },

    /// A numeric value does not fit the declared width.
    #[error("{value} is out of range for the declared type")]
    OutOfRange {
        /// Textual form of the rejected number.
        value: String,
    },

    /// A scalar token could not be read as the declared type.
    #[error("cannot read {token:?} as {expected}: {reason}")]
    InvalidToken {
        /// Offending token.
        token: String,
        /// Human-readable name of the declared type.
        expected: &'static str,
        /// Parser message.
        reason: String,
    },

    /// Text does not name a variant of an enumerated type.
    #[error("unknown variant {token:?}, expected one of: {expected}")]
    UnknownVariant {
        /// Offending token.
        token: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },
}
