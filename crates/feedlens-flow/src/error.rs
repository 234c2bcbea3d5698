//! Flow client error types.

use thiserror::Error;

/// Result type alias for flow client operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors from relaying a message to the flow run endpoint.
#[derive(Debug, Error)]
pub enum FlowError {
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

    /// The response carried no `outputs` to extract a reply from.
    ///
    /// Reportable but non-fatal; the user may re-trigger the call.
    #[error("no result found in the response")]
    MissingOutputs,

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
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
}

impl From<FlowError> for feedlens_core::Error {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::InvalidConfig(message) => feedlens_core::Error::validation(message),
            other => feedlens_core::Error::remote_call(other.to_string()),
        }
    }
}
