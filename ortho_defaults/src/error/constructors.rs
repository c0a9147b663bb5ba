//! Constructors and path bookkeeping for `DefaultsError`.

use crate::schema::FieldDescriptor;

use super::helpers::{join_path, short_type_name};
use super::{DefaultsError, ValueError};

impl DefaultsError {
    /// Builds an [`DefaultsError::InvalidTarget`] for `T`.
    #[must_use]
    pub fn invalid_target<T: ?Sized>() -> Self {
        Self::InvalidTarget {
            type_name: short_type_name::<T>(),
        }
    }

    /// Builds a parse failure for a value of type `T`.
    ///
    /// The path starts empty and grows as the error propagates through
    /// fields and collection elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ortho_defaults::{DefaultsError, ValueError};
    ///
    /// let err = DefaultsError::parse::<u8>(
    ///     "300",
    ///     ValueError::OutOfRange { value: "300".into() },
    /// );
    /// assert_eq!(err.path(), Some(""));
    /// ```
    #[must_use]
    pub fn parse<T: ?Sized>(spec: impl Into<String>, reason: ValueError) -> Self {
        Self::DefaultParse {
            path: String::new(),
            type_name: short_type_name::<T>(),
            spec: spec.into(),
            field_spec: None,
            reason: Box::new(reason),
        }
    }

    /// Builds a failure for text that names no variant of `T`.
    ///
    /// Emitted by derive-generated code for enumerated types.
    #[doc(hidden)]
    #[must_use]
    pub fn unknown_variant<T: ?Sized>(token: &str, accepted: &[&str]) -> Self {
        Self::parse::<T>(
            token,
            ValueError::UnknownVariant {
                token: token.to_owned(),
                expected: accepted.join(", "),
            },
        )
    }

    /// Attributes the error to `field`.
    ///
    /// Errors raised directly by the field's own specification adopt the
    /// field's declared type and raw text. Errors from deeper values keep
    /// their own, gain the field name as a path prefix and record the
    /// field's raw default as `field_spec` unless a deeper field already did.
    #[must_use]
    pub(crate) fn in_field(self, field: &FieldDescriptor) -> Self {
        let raw = field.spec().raw();
        match self {
            Self::DefaultParse {
                path,
                type_name: _,
                spec,
                field_spec,
                reason,
            } if path.is_empty() => Self::DefaultParse {
                path: field.name().to_owned(),
                type_name: field.type_name().to_owned(),
                spec: raw.map_or(spec, str::to_owned),
                field_spec,
                reason,
            },
            Self::DefaultParse {
                path,
                type_name,
                spec,
                field_spec,
                reason,
            } => Self::DefaultParse {
                path: join_path(field.name(), &path),
                type_name,
                spec,
                field_spec: field_spec.or_else(|| raw.map(str::to_owned)),
                reason,
            },
            other @ Self::InvalidTarget { .. } => other,
        }
    }

    /// Prefixes the error path with a field name.
    #[must_use]
    pub(crate) fn within(self, name: &str) -> Self {
        self.prefixed(name)
    }

    /// Prefixes the error path with a sequence index.
    #[must_use]
    pub(crate) fn at_index(self, index: usize) -> Self {
        self.prefixed(&format!("[{index}]"))
    }

    /// Prefixes the error path with a mapping key.
    #[must_use]
    pub(crate) fn at_key(self, key: &str) -> Self {
        self.prefixed(&format!("[{key:?}]"))
    }

    fn prefixed(self, segment: &str) -> Self {
        match self {
            Self::DefaultParse {
                path,
                type_name,
                spec,
                field_spec,
                reason,
            } => Self::DefaultParse {
                path: join_path(segment, &path),
                type_name,
                spec,
                field_spec,
                reason,
            },
            other @ Self::InvalidTarget { .. } => other,
        }
    }

    /// Path of the failing field, if this is a parse failure.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::DefaultParse { path, .. } => Some(path),
            Self::InvalidTarget { .. } => None,
        }
    }

    /// Offending specification text, if this is a parse failure.
    #[must_use]
    pub fn spec(&self) -> Option<&str> {
        match self {
            Self::DefaultParse { spec, .. } => Some(spec),
            Self::InvalidTarget { .. } => None,
        }
    }

    /// Raw default of the enclosing field, for failures inside a structured
    /// literal.
    #[must_use]
    pub fn field_spec(&self) -> Option<&str> {
        match self {
            Self::DefaultParse { field_spec, .. } => field_spec.as_deref(),
            Self::InvalidTarget { .. } => None,
        }
    }

    /// Underlying reason, if this is a parse failure.
    #[must_use]
    pub fn reason(&self) -> Option<&ValueError> {
        match self {
            Self::DefaultParse { reason, .. } => Some(reason),
            Self::InvalidTarget { .. } => None,
        }
    }

    /// Declared type named by the error.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::DefaultParse { type_name, .. } | Self::InvalidTarget { type_name } => type_name,
        }
    }
}
