//! Sample configuration used to demonstrate `ortho_defaults`.
//!
//! [`Sample`] touches every supported field shape: scalars, enumerated
//! text, sequences, mappings, nested and optional composites, a skipped
//! composite, and a composite with an override hook that draws a random
//! number.

pub mod config;
pub mod error;

use std::io::Write;

use ortho_defaults::Defaults;
use tracing::debug;

pub use config::{Gender, Other, Sample};
pub use error::{Result, SampleError};

/// Output layout for [`write_sample_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

/// Builds a [`Sample`] with every default applied.
///
/// # Errors
///
/// Returns [`SampleError::Defaults`] when a default specification fails to
/// parse.
pub fn defaulted_sample() -> Result<Sample> {
    let mut sample = Sample::default();
    ortho_defaults::set(&mut sample)?;
    debug!(fields = Sample::FIELDS.len(), "sample defaulted");
    Ok(sample)
}

/// Writes `sample` as JSON followed by a newline.
///
/// # Errors
///
/// Returns [`SampleError::Render`] when serialisation fails and
/// [`SampleError::Io`] when writing fails.
///
/// # Examples
///
/// ```rust
/// use sample::{Layout, defaulted_sample, write_sample_to};
///
/// let sample = defaulted_sample()?;
/// let mut out = Vec::new();
/// write_sample_to(&mut out, &sample, Layout::Compact)?;
/// let text = String::from_utf8(out).expect("JSON is UTF-8");
/// assert!(text.starts_with(r#"{"Name":"John Smith","Age":27"#));
/// # Ok::<_, sample::SampleError>(())
/// ```
pub fn write_sample_to<W: Write>(writer: &mut W, sample: &Sample, layout: Layout) -> Result<()> {
    let rendered = match layout {
        Layout::Pretty => serde_json::to_string_pretty(sample)?,
        Layout::Compact => serde_json::to_string(sample)?,
    };
    writeln!(writer, "{rendered}")?;
    Ok(())
}
