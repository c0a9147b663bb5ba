//! `value` and `skip` are mutually exclusive.

use ortho_defaults::Defaults;

#[derive(Default, Defaults)]
struct Tuning {
    #[defaults(value = "3", skip)]
    retries: u8,
}

fn main() {}
