//! Chat message types for the per-session conversation history.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User message.
    User,
    /// Assistant reply relayed from the flow.
    Assistant,
}

/// A message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: Uuid,
    /// Message role.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
    /// When the message was created.
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(ChatMessage::user("hi").role, MessageRole::User);
        assert_eq!(ChatMessage::assistant("hello").role, MessageRole::Assistant);
    }

    #[test]
    fn test_role_serialization() {
        let value = serde_json::to_value(MessageRole::Assistant).unwrap();
        assert_eq!(value, serde_json::json!("assistant"));
    }
}
