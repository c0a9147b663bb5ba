//! Type-directed parsing of default specifications.
//!
//! [`DefaultValue`] is implemented for every type a defaultable field may
//! declare. It knows how to turn a top-level specification string into a
//! value, how to decode the same type from a node inside a structured
//! literal, and how the walker should recurse into it.

mod collections;
mod scalar;
mod wrappers;

use crate::error::DefaultsResult;
use crate::literal::Literal;
use crate::schema::Kind;
use crate::zero::IsZero;

/// A type that can appear as a field of a struct deriving
/// [`crate::Defaults`].
///
/// `Default::default()` must produce the zero value reported by
/// [`IsZero`]; the walker relies on this when it allocates optional
/// composites and when composite literals are decoded.
///
/// Implementations exist for booleans, numbers, `char`, `String`,
/// `Option<T>`, `Box<T>`, `Vec<T>`, `HashMap<K, V, S>` and `BTreeMap<K, V>`.
/// `#[derive(Defaults)]` provides it for structs, newtypes and unit enums.
pub trait DefaultValue: IsZero + Default + Sized {
    /// Shape of the type, recorded in field descriptors.
    const KIND: Kind;

    /// Parses a top-level specification string.
    ///
    /// Scalars read the text as a plain token; sequences, mappings and
    /// composites expect a structured literal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DefaultsError::DefaultParse`] when the text cannot
    /// produce a value of this type.
    fn parse_default(spec: &str) -> DefaultsResult<Self>;

    /// Decodes a value nested inside a structured literal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DefaultsError::DefaultParse`] when the literal node
    /// does not match this type.
    fn from_literal(literal: &Literal) -> DefaultsResult<Self>;

    /// Recurses into a value that is already set.
    ///
    /// Only composites (and wrappers around them) do anything here: their
    /// own zero fields are defaulted and their hooks run.
    ///
    /// # Errors
    ///
    /// Propagates failures from nested specifications.
    fn descend(&mut self) -> DefaultsResult<()> {
        Ok(())
    }

    /// Handles a zero value whose field carries no specification.
    ///
    /// Composites are walked in place and optional composites are
    /// allocated first; every other type is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates failures from nested specifications.
    fn fill_unset(&mut self) -> DefaultsResult<()> {
        Ok(())
    }
}
