//! Error types for retime-align organized by boundary stage.

use thiserror::Error;

/// Re-alignment error variants.
///
/// Only input parsing and validation can fail; past the boundary the
/// alignment pipeline is total over its inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON parse error at the input boundary
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Structural validation error
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
}

/// Structural validation errors for machine-transcript documents.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    /// Timestamp is NaN or infinite
    #[error("word {index} ({text:?}): non-finite timestamp")]
    NonFiniteTiming { index: usize, text: String },

    /// Word interval runs backwards
    #[error("word {index} ({text:?}): start {start} is after end {end}")]
    ReversedTiming {
        index: usize,
        text: String,
        start: f64,
        end: f64,
    },
}

/// Result type alias for retime-align operations.
pub type Result<T> = std::result::Result<T, Error>;
