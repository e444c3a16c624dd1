//! Error types for the advent crates.

use thiserror::Error;

/// Errors that can occur in advent storage and configuration.
///
/// Engine operations themselves are infallible; these errors surface only
/// from the standalone storage and settings components.
#[derive(Error, Debug)]
pub enum AdventError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for advent operations.
pub type AdventResult<T> = Result<T, AdventError>;
