//! Request types for the dashboard API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a chat relay request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessage {
    /// Session to append to; a new session is created when absent.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// The user message to relay.
    pub message: String,
    /// Include the raw flow response payload in the reply.
    #[serde(default)]
    pub include_raw: bool,
}

/// Query parameters of an ingest request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestParams {
    /// Target collection; falls back to the configured default.
    #[serde(default)]
    pub collection: Option<String>,
}
