//! Response types for the dashboard API.

use feedlens_core::types::ChatMessage;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reply to a relayed chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Session the exchange was appended to.
    pub session_id: Uuid,
    /// The assistant reply text.
    pub reply: String,
    /// Raw flow response payload, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

/// A session's conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessages {
    /// Session identifier.
    pub session_id: Uuid,
    /// Messages oldest first.
    pub messages: Vec<ChatMessage>,
}

/// Outcome of a dataset ingest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Collection the documents were inserted into.
    pub collection: String,
    /// Number of documents produced by the transform.
    pub documents: usize,
    /// Number of documents the collection reported as inserted.
    pub inserted: usize,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Service status.
    pub status: String,
}

impl Health {
    /// A healthy response.
    pub fn ok() -> Self {
        Self {
            status: "healthy".to_owned(),
        }
    }
}

/// Inline error rendering of the closed error set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetail,
}

/// Kind and message of a rendered error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Error kind from the closed set.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    /// Renders a core error.
    pub fn new(error: &feedlens_core::Error) -> Self {
        Self {
            error: ErrorDetail {
                kind: error.kind_str().to_owned(),
                message: error.to_string(),
            },
        }
    }
}
