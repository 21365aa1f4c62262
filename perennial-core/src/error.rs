//! Error types for the perennial ecosystem.

use thiserror::Error;

/// Errors that can occur in perennial operations.
#[derive(Error, Debug)]
pub enum PerennialError {
    #[error("Invalid share token: {0}")]
    Decode(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for perennial operations.
pub type PerennialResult<T> = Result<T, PerennialError>;
