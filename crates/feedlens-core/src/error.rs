//! The closed error set surfaced at the dashboard action boundary.
//!
//! Every failure that can reach a user-visible response is one of these
//! four variants. Boundary crates keep their own richer error types and
//! convert into this set before a handler renders them, so the response
//! mapping is a total match rather than a catch-all.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Result type alias for operations that surface user-visible errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of user-visible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Required configuration is missing.
    Validation,
    /// Malformed CSV input or a malformed timestamp token.
    Parse,
    /// Network failure, non-2xx status, or a malformed response body.
    RemoteCall,
    /// The `description` column is absent from the input.
    MissingColumn,
}

/// A user-visible error.
///
/// Reported inline at the action boundary; the operation aborts and no
/// automatic retry takes place. The interface remains interactive after
/// any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing required configuration (token, endpoint, collection name).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed CSV input or a malformed timestamp token.
    #[error("parse error: {0}")]
    Parse(String),

    /// Network failure, non-2xx status, or a malformed response body.
    #[error("remote call error: {0}")]
    RemoteCall(String),

    /// No `description` column exists in the input row.
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a remote call error.
    pub fn remote_call(message: impl Into<String>) -> Self {
        Self::RemoteCall(message.into())
    }

    /// Creates a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Parse(_) => ErrorKind::Parse,
            Self::RemoteCall(_) => ErrorKind::RemoteCall,
            Self::MissingColumn(_) => ErrorKind::MissingColumn,
        }
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(Error::validation("x").kind_str(), "validation");
        assert_eq!(Error::parse("x").kind_str(), "parse");
        assert_eq!(Error::remote_call("x").kind_str(), "remote_call");
        assert_eq!(Error::missing_column("x").kind_str(), "missing_column");
    }

    #[test]
    fn test_display_includes_message() {
        let err = Error::missing_column("description");
        assert_eq!(err.to_string(), "missing required column: description");
    }
}
