//! Composite support: the schema trait, the override hook and the
//! per-instance defaulting pipeline.
//!
//! Every composite instance goes through the same steps, whether it is the
//! root handed to [`crate::set`], a nested field, or a value decoded from a
//! structured literal:
//!
//! 1. each field is visited in declaration order by
//!    [`crate::walk::apply_field`];
//! 2. the override hook runs, if the type opted in.

use tracing::debug;

use crate::error::DefaultsResult;
use crate::literal::{self, Literal, LiteralObject};
use crate::schema::FieldDescriptor;
use crate::value::DefaultValue;

/// Schema-introspection capability generated by `#[derive(Defaults)]`.
///
/// The derive also implements [`DefaultValue`] and [`crate::IsZero`] for the
/// type. Implementing this trait by hand is possible but rarely useful.
///
/// # Examples
///
/// ```rust
/// use ortho_defaults::{Defaults, Spec};
///
/// #[derive(Debug, Default, Defaults)]
/// struct Limits {
///     #[defaults(value = "16")]
///     workers: u16,
///     #[defaults(skip)]
///     label: String,
///     retries: Option<u8>,
/// }
///
/// let mut limits = Limits::default();
/// limits.apply_defaults()?;
/// assert_eq!(limits.workers, 16);
/// assert!(limits.label.is_empty());
/// assert!(limits.retries.is_none());
///
/// let specs: Vec<_> = Limits::FIELDS.iter().map(|field| field.spec()).collect();
/// assert_eq!(specs, [Spec::Literal("16"), Spec::Skip, Spec::Absent]);
/// # Ok::<_, ortho_defaults::DefaultsError>(())
/// ```
pub trait Defaults: DefaultValue {
    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Whether [`Defaults::run_hook`] forwards to [`SetDefaults`].
    const HOOK: bool = false;

    /// Visits every field with [`crate::walk::apply_field`].
    ///
    /// # Errors
    ///
    /// Stops at the first field whose specification fails to parse.
    fn walk_fields(&mut self) -> DefaultsResult<()>;

    /// Assigns the fields named in an object literal, leaving the others
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails when a named field's literal does not match its type.
    fn decode_fields(&mut self, object: &LiteralObject) -> DefaultsResult<()>;

    /// Runs the override hook. A no-op unless the struct is annotated with
    /// `#[defaults(hook)]`.
    fn run_hook(&mut self) {}

    /// Applies defaults to this instance and everything beneath it.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::DefaultsError`] encountered. Fields
    /// visited before the failure keep their defaults.
    fn apply_defaults(&mut self) -> DefaultsResult<()> {
        apply(self)
    }
}

/// Override hook for defaults that cannot be written declaratively.
///
/// Opt in with `#[defaults(hook)]` on the struct. The hook runs once per
/// instance, after that instance's declarative defaults and nested
/// composites have been processed. Use [`crate::can_update`] to leave
/// caller-supplied values alone, and keep the hook idempotent if
/// [`crate::set`] may be called more than once on the same value.
///
/// # Examples
///
/// ```rust
/// use ortho_defaults::{Defaults, SetDefaults, can_update};
///
/// #[derive(Debug, Default, Defaults)]
/// #[defaults(hook)]
/// struct Listener {
///     #[defaults(value = "localhost")]
///     host: String,
///     #[defaults(skip)]
///     address: String,
/// }
///
/// impl SetDefaults for Listener {
///     fn set_defaults(&mut self) {
///         if can_update(&self.address) {
///             self.address = format!("{}:8080", self.host);
///         }
///     }
/// }
///
/// let mut listener = Listener::default();
/// ortho_defaults::set(&mut listener)?;
/// assert_eq!(listener.address, "localhost:8080");
/// # Ok::<_, ortho_defaults::DefaultsError>(())
/// ```
pub trait SetDefaults {
    /// Assigns further defaults to a partially defaulted instance.
    fn set_defaults(&mut self);
}

/// Runs the defaulting pipeline on one composite instance.
///
/// # Errors
///
/// Returns the first failure raised while visiting fields; the hook does
/// not run in that case.
pub fn apply<T: Defaults>(target: &mut T) -> DefaultsResult<()> {
    target.walk_fields()?;
    if T::HOOK {
        debug!(
            target_type = std::any::type_name::<T>(),
            "running override hook"
        );
    }
    target.run_hook();
    Ok(())
}

/// Parses a composite from a top-level specification string.
///
/// # Errors
///
/// Fails on malformed literals, non-object literals and nested failures.
pub fn parse_default<T: Defaults>(spec: &str) -> DefaultsResult<T> {
    from_literal(&literal::parse::<T>(spec)?)
}

/// Decodes a composite from an object literal.
///
/// A zero instance receives the keys present in the literal, then runs
/// through [`apply`], so literal values count as already set and omitted
/// fields fall back to their own specifications.
///
/// # Errors
///
/// Fails on non-object literals and nested failures.
pub fn from_literal<T: Defaults>(literal: &Literal) -> DefaultsResult<T> {
    let object = literal::expect_object::<T>(literal)?;
    let mut value = T::default();
    value.decode_fields(object)?;
    apply(&mut value)?;
    Ok(value)
}

/// Assigns one field from an object literal when its key is present.
///
/// The field's own specification plays no part here; a skipped field can
/// still be set explicitly by a literal.
///
/// # Errors
///
/// Fails when the literal node does not match the field's type.
pub fn decode_field<T: DefaultValue>(
    object: &LiteralObject,
    slot: &mut T,
    field: &FieldDescriptor,
) -> DefaultsResult<()> {
    if let Some(node) = literal::lookup(object, field.key()) {
        *slot = T::from_literal(node).map_err(|err| err.within(field.name()))?;
    }
    Ok(())
}
