use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the chat log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// RFC 3339 creation time
    pub timestamp: String,
    /// Upstream model that produced an assistant reply
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    /// Set on synthetic replies standing in for a failed turn
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub error: bool,
}

pub const APOLOGY_TEXT: &str =
    "Sorry, I'm having trouble connecting to the AI service. Please try again later.";

impl Message {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
            model: None,
            error: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text.into())
    }

    pub fn reply(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::assistant(text)
        }
    }

    /// The apology appended when a turn fails.
    pub fn apology() -> Self {
        Self {
            error: true,
            ..Self::assistant(APOLOGY_TEXT)
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
