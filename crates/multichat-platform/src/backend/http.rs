//! HTTP backend adapter.
//!
//! Talks to the chat backend's JSON API:
//! - `GET  {base}/api/v1/services` → `{ "<service>": bool, ... }`
//! - `POST {base}/api/v1/chat`     → `{ "content": string, "model"?: string }`
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use multichat_core::ports::BackendPort;
use multichat_types::{
    ChatError, Result,
    config::ClientConfig,
    service::{ServiceAvailability, ServiceProbe},
    wire::{ChatReply, ChatRequest},
};

use crate::timeout::with_timeout;

/// Backend client bound to one base URL.
pub struct HttpBackend {
    config: ClientConfig,
    services_url: String,
    chat_url: String,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        let services_url = config.services_url();
        let chat_url = config.chat_url();
        Self {
            config,
            services_url,
            chat_url,
        }
    }

    async fn get_services(&self) -> Result<ServiceAvailability> {
        let response = Request::get(&self.services_url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        services_from_response(response).await
    }

    async fn post_chat(&self, req: &ChatRequest) -> Result<ChatReply> {
        let response = Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        reply_from_response(response).await
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn fetch_services(&self) -> ServiceProbe {
        match with_timeout(self.get_services(), self.config.request_timeout_ms).await {
            Ok(availability) => {
                log::info!("Backend reachable at {}", self.config.backend_url);
                ServiceProbe::reachable(availability)
            }
            Err(e) => {
                log::warn!("Capability probe failed ({}), using fallback services", e);
                ServiceProbe::unreachable(&e)
            }
        }
    }

    async fn send_chat(&self, req: ChatRequest) -> Result<ChatReply> {
        log::debug!(
            "POST {} ({} chars, {} history entries)",
            self.chat_url,
            req.message.len(),
            req.history.len()
        );
        with_timeout(self.post_chat(&req), self.config.request_timeout_ms).await
    }

    fn endpoint(&self) -> &str {
        &self.config.backend_url
    }
}

/// Decode a `/services` response into the availability map.
pub async fn services_from_response(response: Response) -> Result<ServiceAvailability> {
    let text = read_success_body(response).await?;
    ServiceAvailability::from_json(&text)
}

/// Decode a `/chat` response into a reply.
pub async fn reply_from_response(response: Response) -> Result<ChatReply> {
    let text = read_success_body(response).await?;
    ChatReply::from_json(&text)
}

/// Body of a 2xx response, or `ChatError::Http` carrying the status.
async fn read_success_body(response: Response) -> Result<String> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ChatError::Http { status, body });
    }

    response
        .text()
        .await
        .map_err(|e| ChatError::Parse(e.to_string()))
}
