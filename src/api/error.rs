//! API Error Types
//!
//! Errors surfaced by the HamGO node client.

use thiserror::Error;

/// Message used when the node fails without saying why
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Errors that can occur when talking to the HamGO node
#[derive(Error, Debug)]
pub enum ApiError {
    /// Endpoint could not be turned into an absolute URL
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Node not reachable
    #[error("HamGO node unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Node answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a transport error the way callers care about it
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable
        } else {
            ApiError::Transport(err)
        }
    }

    /// Status error, substituting the generic label for an empty body
    pub(crate) fn status(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            body
        };
        ApiError::Status { status, message }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
