//! Error types for the DOS adapter

use thiserror::Error;

/// Result type alias for DOS operations
pub type Result<T> = std::result::Result<T, DosError>;

/// Main error type shared across the workspace
#[derive(Error, Debug)]
pub enum DosError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
