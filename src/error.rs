//! Domain-specific error types for emofind-core

use thiserror::Error;

/// Main error type for the EMOFIND analysis core.
///
/// `Transport` and `ResponseFormat` are the two failure kinds `analyze` can
/// surface; `Config` and `Validation` only occur before a request is sent.
#[derive(Error, Debug)]
pub enum EmofindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Response format error: {message}")]
    ResponseFormat { message: String },
}

impl EmofindError {
    /// Short tag used when logging swallowed failures
    pub fn kind(&self) -> &'static str {
        match self {
            EmofindError::Config { .. } => "config",
            EmofindError::Validation { .. } => "validation",
            EmofindError::Transport { .. } => "transport",
            EmofindError::ResponseFormat { .. } => "response_format",
        }
    }
}

impl From<reqwest::Error> for EmofindError {
    fn from(err: reqwest::Error) -> Self {
        EmofindError::Transport {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<serde_json::Error> for EmofindError {
    fn from(err: serde_json::Error) -> Self {
        EmofindError::ResponseFormat {
            message: err.to_string(),
        }
    }
}

/// Result type alias for EMOFIND operations
pub type Result<T> = std::result::Result<T, EmofindError>;
