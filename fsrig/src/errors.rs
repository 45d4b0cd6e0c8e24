//! Error types used across the fsrig harness.

use thiserror::Error;

/// Result type for fsrig operations.
pub type RigResult<T> = Result<T, RigError>;

#[derive(Debug, Error)]
pub enum RigError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    /// Environment preparation failed before dispatch started.
    #[error("setup error: {0}")]
    Setup(String),

    /// The filesystem-creation collaborator failed. Fatal to the run.
    #[error("creation error: {0}")]
    Creation(String),

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("internal error: {0}")]
    Internal(String),
}

// Implement From for common error types to enable `?` operator
impl From<std::io::Error> for RigError {
    fn from(err: std::io::Error) -> Self {
        RigError::Internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RigError {
    fn from(err: serde_json::Error) -> Self {
        RigError::Internal(format!("JSON error: {}", err))
    }
}
