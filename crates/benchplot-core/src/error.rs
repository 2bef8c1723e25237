// File: crates/benchplot-core/src/error.rs
// Summary: Error taxonomy shared by loading, validation and rendering.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ChartError> = std::result::Result<T, E>;

/// Which axis a value was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// Malformed or non-rectangular grid input.
    #[error("{source_name}: line {line}: {reason}")]
    Parse {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// A file could not be opened, read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value the requested axis scale cannot represent.
    #[error("{axis} axis cannot show {value} (series '{series}', point {index}): {reason}")]
    Domain {
        axis: AxisId,
        series: String,
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Empty or mismatched data.
    #[error("{subject}: {reason}")]
    Shape { subject: String, reason: String },

    #[error("invalid chart spec: {0}")]
    Spec(String),

    #[error("invalid chart spec json: {0}")]
    SpecJson(#[from] serde_json::Error),

    #[error("render failed: {0}")]
    Render(String),

    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl ChartError {
    pub(crate) fn shape(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        ChartError::Shape { subject: subject.into(), reason: reason.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChartError::Io { path: path.into(), source }
    }
}
