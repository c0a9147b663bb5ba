//! Error types produced while applying defaults.

mod constructors;
mod helpers;
mod types;

pub use types::{DefaultsError, ValueError};

/// Result alias used throughout the crate.
pub type DefaultsResult<T> = Result<T, DefaultsError>;

#[cfg(test)]
mod tests;
