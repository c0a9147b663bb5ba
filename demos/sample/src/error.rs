//! Error types for the sample binary.

use thiserror::Error;

/// Errors raised while building or printing the sample.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A default specification on [`crate::Sample`] failed to parse.
    #[error("failed to apply defaults: {0}")]
    Defaults(#[from] ortho_defaults::DefaultsError),
    /// The defaulted sample could not be serialised.
    #[error("failed to render sample: {0}")]
    Render(#[from] serde_json::Error),
    /// Standard output could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for the sample binary.
pub type Result<T, E = SampleError> = std::result::Result<T, E>;
