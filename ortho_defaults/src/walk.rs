//! Per-field decision logic of the object walker.

use tracing::trace;

use crate::error::DefaultsResult;
use crate::schema::{FieldDescriptor, Spec};
use crate::value::DefaultValue;

/// Applies the declarative default for one field.
///
/// - a skipped field is left alone, including anything nested in it;
/// - a field that is already set keeps its value, but composites beneath
///   it are still visited so their own defaults and hooks apply;
/// - a zero field with a specification receives the parsed value;
/// - a zero field without a specification is only recursed into, which
///   defaults nested composites and allocates optional ones.
///
/// # Errors
///
/// Returns the first parse failure, annotated with the field's path.
pub fn apply_field<T: DefaultValue>(slot: &mut T, field: &FieldDescriptor) -> DefaultsResult<()> {
    let outcome = match field.spec() {
        Spec::Skip => {
            trace!(field = field.name(), "skipping field");
            return Ok(());
        }
        _ if !slot.is_zero() => {
            trace!(field = field.name(), "field already set; descending");
            slot.descend()
        }
        Spec::Literal(raw) => {
            trace!(field = field.name(), spec = raw, "applying declarative default");
            T::parse_default(raw).map(|value| *slot = value)
        }
        Spec::Absent => slot.fill_unset(),
    };
    outcome.map_err(|err| err.in_field(field))
}
