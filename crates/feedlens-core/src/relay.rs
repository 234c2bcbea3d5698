//! Chat relay boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reply produced by the remote conversational flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayReply {
    /// Extracted reply text.
    pub text: String,
    /// The raw response payload, kept for optional passthrough.
    pub raw: serde_json::Value,
}

impl RelayReply {
    /// Creates a reply from extracted text and the raw payload.
    pub fn new(text: impl Into<String>, raw: serde_json::Value) -> Self {
        Self {
            text: text.into(),
            raw,
        }
    }
}

/// Trait for relaying a user message to a remote conversational flow.
///
/// Implementations post the message to the flow-execution endpoint and
/// return the parsed reply. There is no retry or backoff; a failed call
/// surfaces as a [`RemoteCall`] error and the user may re-trigger manually.
///
/// [`RemoteCall`]: crate::Error::RemoteCall
#[async_trait]
pub trait ChatRelay: Send + Sync {
    /// Relays one user message and returns the flow's reply.
    async fn send(&self, message: &str) -> Result<RelayReply>;
}
