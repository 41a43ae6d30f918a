//! Error types and error handling for gramdex.
//!
//! This module defines the error types used throughout the
//! application. CLI-specific presentation (exit codes, colored
//! messages) is handled in the `cli` adapter.

use thiserror::Error;

/// Result type alias for gramdex operations
pub type Result<T> = std::result::Result<T, GramdexError>;

/// Main error type for gramdex
#[derive(Error, Debug)]
pub enum GramdexError {
    #[error("Invalid root: {0}")]
    InvalidRoot(String),

    #[error("Traversal failed: {0}")]
    TraversalFailed(String),

    #[error("Invalid gram: {0}")]
    InvalidGram(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GramdexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, GramdexError::InvalidRoot(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            GramdexError::InvalidGram(_) | GramdexError::ConfigError(_)
        )
    }
}
