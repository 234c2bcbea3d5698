//! Value types shared across the workspace.

mod document;
mod message;
mod table;

pub use document::Document;
pub use message::{ChatMessage, MessageRole};
pub use table::{Row, Table};
