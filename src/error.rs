//! Unified error types for the Bitnet API SDK

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Bitnet API SDK
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The agent answered with `success: false`
    #[error("API error: {0}")]
    Api(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Version string could not be parsed
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Release step failed
    #[error("Release failed: {0}")]
    Release(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        Error::Api(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new invalid version error
    pub fn invalid_version<S: Into<String>>(msg: S) -> Self {
        Error::InvalidVersion(msg.into())
    }

    /// Create a new release error
    pub fn release<S: Into<String>>(msg: S) -> Self {
        Error::Release(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
