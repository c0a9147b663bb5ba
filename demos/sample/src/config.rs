//! The sample configuration types.

use std::collections::{BTreeMap, HashMap};

use ortho_defaults::{Defaults, SetDefaults, can_update};
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// Free-form gender marker; any text is accepted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Defaults)]
#[serde(transparent)]
pub struct Gender(pub String);

/// Top-level sample configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Defaults)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    /// Display name.
    #[defaults(value = "John Smith")]
    pub name: String,
    /// Age in years.
    #[defaults(value = "27")]
    pub age: i64,
    /// Gender marker.
    #[defaults(value = "m")]
    pub gender: Gender,
    /// Whether the person is employed.
    #[defaults(value = "true")]
    pub working: bool,

    /// Plain integers.
    #[defaults(value = "[1, 2, 3]")]
    pub slice_int: Vec<i64>,
    /// Optional integers; `null` elements stay `None`.
    #[defaults(value = "[1, 2, 3]")]
    pub slice_opt: Vec<Option<i64>>,
    /// Text elements.
    #[defaults(value = r#"["a", "b"]"#)]
    pub slice_string: Vec<String>,

    /// Empty map literal.
    #[defaults(value = "{}")]
    pub map_null: BTreeMap<String, i64>,
    /// Map of scalars.
    #[defaults(value = r#"{"key1": 123}"#)]
    pub map: BTreeMap<String, i64>,
    /// Map of composites; each entry runs through the full pipeline.
    #[defaults(value = r#"{"Key2": {"Foo": 123}}"#)]
    pub map_of_struct: BTreeMap<String, Other>,
    /// Map of boxed composites.
    #[defaults(value = r#"{"Key3": {"Foo": 123}}"#)]
    pub map_of_boxed_struct: BTreeMap<String, Box<Other>>,
    /// Hash map of composites.
    #[defaults(value = r#"{"Key4": {"Foo": 123}}"#)]
    pub map_of_struct_hashed: HashMap<String, Other>,

    /// Composite from a literal.
    #[defaults(value = r#"{"Foo": 123}"#)]
    pub r#struct: Other,
    /// Optional composite from a literal.
    #[defaults(value = r#"{"Foo": 123}"#)]
    pub struct_opt: Option<Box<Other>>,

    /// Recursed into without a literal of its own.
    pub no_tag: Other,
    /// Left entirely alone.
    #[defaults(value = "-")]
    pub no_option: Other,
}

/// Nested composite with a dynamic default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Defaults)]
#[serde(rename_all = "PascalCase")]
#[defaults(hook)]
pub struct Other {
    /// Greeting text.
    #[defaults(value = "world")]
    pub hello: String,
    /// Only ever set by literals.
    #[defaults(value = "-")]
    pub foo: i64,
    /// Drawn by the override hook.
    #[defaults(value = "-")]
    pub random: i64,
}

impl SetDefaults for Other {
    fn set_defaults(&mut self) {
        if can_update(&self.random) {
            self.random = rand::rng().random_range(0..i64::MAX);
            trace!(random = self.random, "drew random value");
        }
    }
}
