//! The per-row output unit stored by the bulk loader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A document ready for vectorized storage.
///
/// The `vectorize` field is the text handed to the downstream embedding
/// system; `metadata` carries every other original column, stored but not
/// embedded. The metadata never contains the `description` key, and
/// missing values are rendered as empty strings rather than absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Vectorization-input text.
    #[serde(rename = "$vectorize")]
    pub vectorize: String,
    /// All remaining original columns.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Creates a document with the given vectorization input.
    pub fn new(vectorize: impl Into<String>) -> Self {
        Self {
            vectorize: vectorize.into(),
            metadata: HashMap::new(),
        }
    }

    /// Replaces the metadata mapping.
    pub fn with_metadata(
        mut self,
        metadata: impl IntoIterator<Item = (impl Into<String>, serde_json::Value)>,
    ) -> Self {
        self.metadata = metadata.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    /// Adds a single metadata field.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
