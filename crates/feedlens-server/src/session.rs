//! In-memory chat session store.

use std::collections::HashMap;
use std::sync::Arc;

use feedlens_core::types::ChatMessage;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Per-session conversation history.
///
/// Sessions are keyed by UUID and live until explicitly cleared by a user
/// action; there is no TTL and no background eviction. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Vec<ChatMessage>>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to a session, creating the session if needed.
    pub async fn append(&self, session_id: Uuid, message: ChatMessage) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(session_id).or_default().push(message);
    }

    /// Returns the messages of a session, oldest first.
    ///
    /// An unknown session yields an empty history.
    pub async fn messages(&self, session_id: Uuid) -> Vec<ChatMessage> {
        let sessions = self.sessions.read().await;
        sessions.get(&session_id).cloned().unwrap_or_default()
    }

    /// Clears a session's history.
    ///
    /// Returns true if the session existed.
    pub async fn clear(&self, session_id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session_id).is_some()
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no sessions exist.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_read_back() {
        let store = SessionStore::new();
        let session_id = Uuid::now_v7();

        store.append(session_id, ChatMessage::user("hi")).await;
        store.append(session_id, ChatMessage::assistant("hello")).await;

        let messages = store.messages(session_id).await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "hi");
        assert_eq!(messages[1].content, "hello");
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let store = SessionStore::new();
        assert!(store.messages(Uuid::now_v7()).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_the_session() {
        let store = SessionStore::new();
        let session_id = Uuid::now_v7();

        store.append(session_id, ChatMessage::user("hi")).await;
        assert!(store.clear(session_id).await);
        assert!(!store.clear(session_id).await);
        assert!(store.is_empty().await);
    }
}
