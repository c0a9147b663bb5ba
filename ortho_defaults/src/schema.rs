//! Field descriptors emitted by `#[derive(Defaults)]`.
//!
//! The descriptors are the static schema the walker consults for every
//! field: its name, the key used inside structured literals, the declared
//! type and the default specification attached to it.

/// Shape of a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Booleans, numbers, text and enumerated text.
    Scalar,
    /// `Option<T>`.
    Optional,
    /// `Vec<T>`.
    Sequence,
    /// Text-keyed maps.
    Mapping,
    /// A struct deriving [`crate::Defaults`].
    Composite,
}

/// Default specification attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spec {
    /// No `#[defaults(...)]` value: nothing to parse, composites still
    /// recurse.
    Absent,
    /// `#[defaults(skip)]` or `value = "-"`: no default and no recursion.
    Skip,
    /// Raw text parsed according to the field's declared type.
    Literal(&'static str),
}

impl Spec {
    /// Returns the raw text for literal specifications.
    #[must_use]
    pub const fn raw(&self) -> Option<&'static str> {
        match *self {
            Self::Literal(raw) => Some(raw),
            Self::Absent | Self::Skip => None,
        }
    }
}

/// Static description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    key: &'static str,
    type_name: &'static str,
    kind: Kind,
    spec: Spec,
}

impl FieldDescriptor {
    /// Builds a descriptor. Called from derive-generated code.
    #[must_use]
    pub const fn new(
        name: &'static str,
        key: &'static str,
        type_name: &'static str,
        kind: Kind,
        spec: Spec,
    ) -> Self {
        Self {
            name,
            key,
            type_name,
            kind,
            spec,
        }
    }

    /// Rust field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key matched against structured-literal objects.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Declared type as written in the struct definition.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Shape of the declared type.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Default specification attached to the field.
    #[must_use]
    pub const fn spec(&self) -> Spec {
        self.spec
    }
}
