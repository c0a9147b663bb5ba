//! Enumerations need a `#[default]` zero variant.

use ortho_defaults::Defaults;

#[derive(Defaults)]
enum Mode {
    Auto,
    Manual,
}

fn main() {}
