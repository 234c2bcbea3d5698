//! Application state and dependency injection.

use std::sync::Arc;

use feedlens_core::{ChatRelay, DocumentSink, Error};

use crate::Result;
use crate::session::SessionStore;

/// Shared application state.
///
/// The relay and sink are optional: configuration may be absent, in which
/// case the corresponding operations report validation errors at the
/// action boundary instead of failing at startup.
#[derive(Clone, Default)]
#[must_use = "state does nothing unless you use it"]
pub struct AppState {
    relay: Option<Arc<dyn ChatRelay>>,
    sink: Option<Arc<dyn DocumentSink>>,
    default_collection: Option<String>,
    sessions: SessionStore,
}

impl AppState {
    /// Creates state with no configured collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chat relay.
    pub fn with_relay(mut self, relay: Arc<dyn ChatRelay>) -> Self {
        self.relay = Some(relay);
        self
    }

    /// Sets the document sink.
    pub fn with_sink(mut self, sink: Arc<dyn DocumentSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the collection used when an ingest names none.
    pub fn with_default_collection(mut self, collection: impl Into<String>) -> Self {
        self.default_collection = Some(collection.into());
        self
    }

    /// Returns the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Returns the chat relay, or a validation error when unconfigured.
    pub fn relay(&self) -> Result<&Arc<dyn ChatRelay>> {
        self.relay
            .as_ref()
            .ok_or_else(|| Error::validation("application token is required").into())
    }

    /// Returns the document sink, or a validation error when unconfigured.
    pub fn sink(&self) -> Result<&Arc<dyn DocumentSink>> {
        self.sink
            .as_ref()
            .ok_or_else(|| Error::validation("database endpoint and token are required").into())
    }

    /// Resolves the target collection from a per-request override or the
    /// configured default.
    pub fn resolve_collection(&self, requested: Option<String>) -> Result<String> {
        requested
            .filter(|name| !name.is_empty())
            .or_else(|| self.default_collection.clone())
            .ok_or_else(|| Error::validation("collection name is required").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_state_reports_validation_errors() {
        let state = AppState::new();
        assert!(state.relay().is_err());
        assert!(state.sink().is_err());
        assert!(state.resolve_collection(None).is_err());
    }

    #[test]
    fn test_collection_override_wins() {
        let state = AppState::new().with_default_collection("posts");

        let resolved = state.resolve_collection(Some("override".into())).unwrap();
        assert_eq!(resolved, "override");

        let resolved = state.resolve_collection(None).unwrap();
        assert_eq!(resolved, "posts");

        // An empty override falls back to the default.
        let resolved = state.resolve_collection(Some(String::new())).unwrap();
        assert_eq!(resolved, "posts");
    }
}
