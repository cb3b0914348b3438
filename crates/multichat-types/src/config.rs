use serde::{Deserialize, Serialize};

use crate::persona::PersonaId;
use crate::service::ServiceId;
use crate::{ChatError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_APP_NAME: &str = "MultiAI Chatbot";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

const SERVICES_PATH: &str = "/api/v1/services";
const CHAT_PATH: &str = "/api/v1/chat";

/// Top-level client configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub backend_url: String,
    pub request_timeout_ms: u32,
    pub default_persona: PersonaId,
    pub default_service: ServiceId,
    pub app_name: String,
    pub app_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_persona: PersonaId::News,
            default_service: ServiceId::Groq,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at build time via `MULTICHAT_BACKEND_URL` and
    /// `MULTICHAT_APP_NAME`. Falls back to the defaults for anything unset or
    /// invalid.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(name) = option_env!("MULTICHAT_APP_NAME").filter(|n| !n.trim().is_empty()) {
            config.app_name = name.to_string();
        }
        config.with_backend_override(option_env!("MULTICHAT_BACKEND_URL"))
    }

    /// Replace the backend URL when `url` is present and valid.
    pub fn with_backend_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            match normalize_backend_url(url) {
                Ok(url) => self.backend_url = url,
                Err(e) => log::warn!("Ignoring backend URL override: {}", e),
            }
        }
        self
    }

    pub fn services_url(&self) -> String {
        format!("{}{}", self.backend_url, SERVICES_PATH)
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.backend_url, CHAT_PATH)
    }
}

/// Validate a backend base URL and strip trailing slashes.
pub fn normalize_backend_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ChatError::Config("backend URL is empty".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ChatError::Config(format!(
            "backend URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(url.to_string())
}
