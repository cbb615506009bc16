//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The one message users ever see, whatever failed underneath
    pub const USER_MESSAGE: &'static str = "Something went wrong";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
