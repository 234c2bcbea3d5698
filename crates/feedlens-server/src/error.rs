//! Error-to-response mapping at the action boundary.
//!
//! Handlers only ever see the closed core error set; this module renders
//! it as a JSON response so that nothing is silently swallowed and the
//! interface remains interactive after a failure.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use feedlens_core::ErrorKind;

use crate::handler::response::ErrorResponse;

/// Result type alias for handler operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A handler-level error wrapping the closed core set.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] feedlens_core::Error);

impl Error {
    /// Returns the wrapped core error.
    pub fn inner(&self) -> &feedlens_core::Error {
        &self.0
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation | ErrorKind::MissingColumn => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Parse => StatusCode::BAD_REQUEST,
            ErrorKind::RemoteCall => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<MultipartError> for Error {
    fn from(err: MultipartError) -> Self {
        Self(feedlens_core::Error::parse(format!(
            "invalid multipart upload: {err}"
        )))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::debug!(
            target: "feedlens_server::error",
            kind = self.0.kind_str(),
            status = status.as_u16(),
            error = %self.0,
            "Rendering error response"
        );

        (status, Json(ErrorResponse::new(&self.0))).into_response()
    }
}
