//! Enumerations must consist of unit variants.

use ortho_defaults::Defaults;

#[derive(Default, Defaults)]
enum Source {
    #[default]
    Local,
    Remote(String),
}

fn main() {}
