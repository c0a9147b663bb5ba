use ortho_defaults::{Defaults, DefaultsResult};

/// Verifies that `#[defaults(crate = "ortho_defaults")]` is accepted and
/// the generated code compiles. Uses the real crate name as a
/// self-referential alias so no workspace reconfiguration is needed.
#[derive(Debug, Default, Defaults)]
#[defaults(crate = "ortho_defaults")]
struct CratePathConfig {
    #[defaults(value = "hello")]
    value: String,
    #[defaults(value = "1")]
    count: u32,
}

fn main() {
    let mut config = CratePathConfig::default();
    let result: DefaultsResult<()> = ortho_defaults::set(&mut config);
    let _ = (result, config.value, config.count);
}
