//! Error types for the parser.
//!
//! Almost nothing in this crate can fail: absent markers, empty input and
//! zero matches are all normal results. The only core-level error is a bad
//! chunk-size configuration; the remaining variants exist for the CLI's file
//! handling.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Chunk size bounds are zero or inverted.
    #[error("invalid chunk bounds: min={min}, max={max} (expected 0 < min < max)")]
    InvalidChunkBounds { min: usize, max: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document parsing failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
