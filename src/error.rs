//! Error handling module for SkipHire
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Booking transitions have their own rejection type in [`crate::booking`];
//! these errors cover the application shell (terminal, settings, CLI).

use thiserror::Error;

/// Main error type for the SkipHire application
#[derive(Error, Debug)]
pub enum SkipHireError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Settings errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog lookups that a caller required to succeed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SkipHire operations
pub type Result<T> = std::result::Result<T, SkipHireError>;

// Convenient error constructors
impl SkipHireError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SkipHireError::config("tick rate out of range");
        assert_eq!(err.to_string(), "Configuration error: tick rate out of range");

        let err = SkipHireError::catalog("no skip with id 1");
        assert_eq!(err.to_string(), "Catalog error: no skip with id 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkipHireError = io_err.into();
        assert!(matches!(err, SkipHireError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            SkipHireError::terminal("raw mode"),
            SkipHireError::Terminal(_)
        ));
        assert!(matches!(
            SkipHireError::config("bad level"),
            SkipHireError::Config(_)
        ));
    }
}
