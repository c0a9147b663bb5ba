//! `hook` requires a `SetDefaults` implementation.

use ortho_defaults::{Defaults, SetDefaults};

#[derive(Default, Defaults)]
#[defaults(hook)]
struct Seeded;

impl SetDefaults for Seeded {
    fn set_defaults(&mut self) {}
}

#[derive(Default, Defaults)]
#[defaults(hook)]
struct Unseeded;

fn main() {}
