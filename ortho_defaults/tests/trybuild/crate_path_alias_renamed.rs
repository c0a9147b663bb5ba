//! Trybuild fixture verifying `#[defaults(crate = "...")]` works with a
//! genuine dependency rename via `use ... as`.

use ortho_defaults as my_defaults;
use my_defaults::{Defaults, SetDefaults};

/// Verifies that `#[defaults(crate = "my_defaults")]` generates code that
/// references items through the aliased name rather than `ortho_defaults`.
#[derive(Debug, Default, Defaults)]
#[defaults(crate = "my_defaults", hook)]
struct AliasedConfig {
    #[defaults(value = "[1, 2]")]
    values: Vec<u8>,
    inner: Option<Inner>,
}

#[derive(Debug, Default, Defaults)]
#[defaults(crate = "my_defaults")]
struct Inner {
    #[defaults(value = "x")]
    label: String,
}

impl SetDefaults for AliasedConfig {
    fn set_defaults(&mut self) {}
}

fn main() {
    let mut config = AliasedConfig::default();
    let result: my_defaults::DefaultsResult<()> = my_defaults::set(&mut config);
    let _ = (result, config.values, config.inner.map(|inner| inner.label));
}
