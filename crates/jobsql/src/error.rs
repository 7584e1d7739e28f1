//! Error types for jobsql

use thiserror::Error;

/// Result type alias for fragment building
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for fragment building
#[derive(Debug, Error)]
pub enum BuildError {
    /// Caller misuse: the input cannot produce a meaningful fragment
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Malformed SQL identifier
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BuildError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a bad request error
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
