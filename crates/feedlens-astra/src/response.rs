//! Data API response shapes.

use serde::{Deserialize, Serialize};

/// Response envelope of a Data API command.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CommandResponse {
    /// Command status, present on success.
    #[serde(default)]
    pub status: Option<CommandStatus>,
    /// Command errors, present on failure.
    #[serde(default)]
    pub errors: Vec<CommandError>,
}

/// Status payload of a successful command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandStatus {
    /// Identifiers of the inserted documents.
    #[serde(default)]
    pub inserted_ids: Vec<serde_json::Value>,
}

/// One command error entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CommandError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

/// Outcome of an `insertMany` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertManyResult {
    /// Identifiers assigned to the inserted documents.
    pub inserted_ids: Vec<serde_json::Value>,
}

impl InsertManyResult {
    /// Returns the number of inserted documents.
    pub fn inserted(&self) -> usize {
        self.inserted_ids.len()
    }
}
