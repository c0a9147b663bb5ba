//! Declarative defaults for zero-valued struct fields.
//!
//! Annotate a struct with `#[derive(Defaults)]` and attach a default
//! specification to its fields. [`set`] then walks the value, filling every
//! field that still holds its zero value:
//!
//! - scalars take a plain token: `#[defaults(value = "27")]`;
//! - sequences, mappings and composites take a structured literal:
//!   `#[defaults(value = r#"{"key1": 123}"#)]`;
//! - `#[defaults(skip)]` (or the `-` marker) opts a field out of both
//!   defaulting and recursion;
//! - fields without a specification are left alone, except that nested
//!   composites are still defaulted and optional composites are allocated.
//!
//! Values the caller already set are never overwritten. After a composite's
//! fields are handled, its [`SetDefaults`] hook runs when the struct is
//! annotated with `#[defaults(hook)]`.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use ortho_defaults::Defaults;
//!
//! #[derive(Debug, Default, Defaults)]
//! struct Sample {
//!     #[defaults(value = "John Smith")]
//!     name: String,
//!     #[defaults(value = "[1, 2, 3]")]
//!     ids: Vec<u32>,
//!     #[defaults(value = r#"{"Key2": {"Foo": 123}}"#)]
//!     others: BTreeMap<String, Other>,
//!     nested: Other,
//! }
//!
//! #[derive(Debug, Default, Defaults)]
//! #[serde(rename_all = "PascalCase")]
//! struct Other {
//!     #[defaults(value = "world")]
//!     hello: String,
//!     #[defaults(skip)]
//!     foo: i64,
//! }
//!
//! let mut sample = Sample::default();
//! ortho_defaults::set(&mut sample)?;
//! assert_eq!(sample.name, "John Smith");
//! assert_eq!(sample.ids, [1, 2, 3]);
//! assert_eq!(sample.others["Key2"].foo, 123);
//! assert_eq!(sample.others["Key2"].hello, "world");
//! assert_eq!(sample.nested.hello, "world");
//! assert_eq!(sample.nested.foo, 0);
//! # Ok::<_, ortho_defaults::DefaultsError>(())
//! ```
//!
//! Ownership keeps the object graph a tree, so no cycle tracking is needed.
//! A type that contains itself through an optional field (for example
//! `next: Option<Box<Node>>`) must mark that field `skip`, otherwise the
//! walker keeps allocating new nodes.

pub use ortho_defaults_macros::Defaults;

pub mod composite;
mod error;
pub mod literal;
mod schema;
mod value;
pub mod walk;
mod zero;

pub use composite::{Defaults, SetDefaults};
pub use error::{DefaultsError, DefaultsResult, ValueError};
pub use literal::{Literal, LiteralObject};
pub use schema::{FieldDescriptor, Kind, Spec};
pub use value::DefaultValue;
pub use zero::{IsZero, can_update};

use tracing::debug;

/// Applies defaults to `target` and every composite reachable from it.
///
/// # Errors
///
/// Returns [`DefaultsError::InvalidTarget`] when `T` is not a composite, in
/// which case nothing is modified. Otherwise returns the first
/// [`DefaultsError::DefaultParse`] encountered; fields processed before the
/// failure keep their defaults.
///
/// # Examples
///
/// ```rust
/// use ortho_defaults::{Defaults, DefaultsError};
///
/// #[derive(Default, Defaults)]
/// struct Retry {
///     #[defaults(value = "3")]
///     attempts: u8,
/// }
///
/// let mut retry = Retry { attempts: 9 };
/// ortho_defaults::set(&mut retry)?;
/// assert_eq!(retry.attempts, 9);
///
/// let mut scalar = 0_u8;
/// assert!(matches!(
///     ortho_defaults::set(&mut scalar),
///     Err(DefaultsError::InvalidTarget { .. })
/// ));
/// # Ok::<_, DefaultsError>(())
/// ```
pub fn set<T: DefaultValue>(target: &mut T) -> DefaultsResult<()> {
    if T::KIND != Kind::Composite {
        return Err(DefaultsError::invalid_target::<T>());
    }
    debug!(
        target_type = std::any::type_name::<T>(),
        "applying defaults"
    );
    target.descend()
}
