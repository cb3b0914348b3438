//! JSON shapes exchanged with the chat backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::{Message, Role};
use crate::persona::PersonaId;
use crate::service::ServiceId;
use crate::{ChatError, Result};

/// Maximum number of prior log entries forwarded with a chat turn.
pub const HISTORY_LIMIT: usize = 4;

/// A prior turn reduced to what the backend needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

/// The trailing `HISTORY_LIMIT` entries of `messages`, oldest first.
pub fn history_window(messages: &[Message]) -> Vec<HistoryEntry> {
    let start = messages.len().saturating_sub(HISTORY_LIMIT);
    messages[start..].iter().map(HistoryEntry::from).collect()
}

/// Body of `POST /api/v1/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub chatbot_type: PersonaId,
    pub service: ServiceId,
    pub history: Vec<HistoryEntry>,
}

/// Validated reply from `POST /api/v1/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub model: Option<String>,
}

impl ChatReply {
    /// Parse a response body, rejecting anything without a string `content`.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ChatError::Parse(e.to_string()))?;
        let obj = value
            .as_object()
            .ok_or_else(|| ChatError::Parse("expected a JSON object".to_string()))?;

        let content = obj
            .get("content")
            .and_then(Value::as_str)
            .ok_or(ChatError::MissingContent)?
            .to_string();

        let model = obj
            .get("model")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(String::from);

        Ok(Self { content, model })
    }
}
