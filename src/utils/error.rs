//! Error handling for the engine
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (empty or malformed required field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Username already present in the registry
    #[error("Username taken: {0}")]
    UsernameTaken(String),

    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Not found errors (unknown resource id)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authenticated but insufficient role
    #[error("Denied: {0}")]
    Denied(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a username-taken error
    pub fn username_taken<S: Into<String>>(username: S) -> Self {
        Self::UsernameTaken(username.into())
    }

    /// Create a not-found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a denied error
    pub fn denied<S: Into<String>>(msg: S) -> Self {
        Self::Denied(msg.into())
    }

    /// Whether this error is a refusal (authenticated but not allowed)
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}
