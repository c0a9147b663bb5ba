//! Formatting helpers for error reporting.

/// Renders an empty path as the root marker.
pub(super) fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

/// Names the enclosing field's default, if any.
pub(super) fn display_field_spec(field_spec: Option<&str>) -> String {
    field_spec.map_or_else(String::new, |raw| format!(" in field default {raw:?}"))
}

/// Joins a leading path segment onto an existing path.
///
/// Index and key segments (`[0]`, `["k"]`) attach without a separating dot.
pub(super) fn join_path(segment: &str, rest: &str) -> String {
    if rest.is_empty() {
        segment.to_owned()
    } else if rest.starts_with('[') {
        format!("{segment}{rest}")
    } else {
        format!("{segment}.{rest}")
    }
}

/// Returns `std::any::type_name` with module paths removed.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    strip_module_paths(std::any::type_name::<T>())
}

fn strip_module_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if ch.is_alphanumeric() || ch == '_' {
            segment.push(ch);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(&segment);
    out
}
