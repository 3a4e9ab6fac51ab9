//! Custom error types for relay operations

use thiserror::Error;

/// Relay-related errors
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request body could not be parsed
    #[error("Bad request: {message}")]
    RequestError {
        /// Parse failure detail
        message: String,
    },

    /// Translator handle was never constructed for this direction
    #[error("Translator unavailable for this direction")]
    ProviderUnavailable,

    /// Provider returned a non-success status
    #[error("Provider error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider error body
        message: String,
    },

    /// Network error reaching the provider
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport failure detail
        message: String,
    },

    /// Provider payload did not have the expected shape
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// Payload failure detail
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for RelayError {
    fn from(err: anyhow::Error) -> Self {
        RelayError::InternalError(err.to_string())
    }
}

/// Result type for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
