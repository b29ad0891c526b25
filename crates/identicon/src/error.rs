//! Error types for identicon generation.

use identicon_core::CoreError;
use thiserror::Error;

/// Errors that can occur while generating or encoding an identicon.
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// Derivation error from the core.
    #[error("identicon error: {0}")]
    Core(#[from] CoreError),

    /// Image encoding error.
    #[error("encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration rejected before any key was hashed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for identicon operations.
pub type Result<T> = std::result::Result<T, IdenticonError>;
