//! Error types for the identicon core.

use thiserror::Error;

/// Errors that can occur while deriving an identicon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("not enough bytes for color determination: need {needed}, got {got}")]
    InsufficientBytes { needed: usize, got: usize },

    #[error("not enough digest bits for fill pattern: need {needed} cells, have {available} bits")]
    InsufficientPatternBytes { needed: usize, available: usize },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
