//! Data API error types.

use thiserror::Error;

/// Result type alias for Data API operations.
pub type AstraResult<T> = Result<T, AstraError>;

/// Errors from talking to the Data API.
#[derive(Debug, Error)]
pub enum AstraError {
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport-level failure (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body snippet.
        body: String,
    },

    /// The Data API reported command errors in its response body.
    #[error("data api error: {0}")]
    Api(String),

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl AstraError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Creates a status error from a code and body snippet.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates an API command error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}

impl From<AstraError> for feedlens_core::Error {
    fn from(err: AstraError) -> Self {
        match err {
            AstraError::InvalidConfig(message) => feedlens_core::Error::validation(message),
            other => feedlens_core::Error::remote_call(other.to_string()),
        }
    }
}
