use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Response is missing the `content` field")]
    MissingContent,

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
