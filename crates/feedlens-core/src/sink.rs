//! Document sink boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Document;

/// Trait for bulk-inserting documents into a remote collection.
///
/// Batch sizes are unbounded; documents are handed over in one call and
/// discarded by the caller afterwards.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Inserts documents into the named collection.
    ///
    /// Returns the number of inserted documents on success.
    async fn insert_many(&self, collection: &str, documents: &[Document]) -> Result<usize>;
}
