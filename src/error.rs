//! Custom error types for creatorlink
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for creatorlink operations
#[derive(Error, Debug)]
pub enum CreatorlinkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A requested handle is already in use on the platform
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// A verification code was rejected
    #[error("Verification failed: {0}")]
    Verification(String),

    /// The payment gateway rejected a card
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// Backend service failures (the mock services never produce these,
    /// but callers treat the port as fallible)
    #[error("Service error: {0}")]
    Service(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CreatorlinkError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error leaves the draft retryable (service rejections
    /// keep entered data; validation errors never mutated it)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken(_) | Self::Verification(_) | Self::PaymentDeclined(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CreatorlinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CreatorlinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for creatorlink operations
pub type CreatorlinkResult<T> = Result<T, CreatorlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CreatorlinkError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_username_taken() {
        let err = CreatorlinkError::UsernameTaken("admin".into());
        assert_eq!(err.to_string(), "Username already taken: admin");
        assert!(err.is_retryable());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_flag() {
        let err = CreatorlinkError::Validation("bad email".into());
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: CreatorlinkError = io_err.into();
        assert!(matches!(app_err, CreatorlinkError::Io(_)));
    }
}
