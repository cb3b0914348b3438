//! WASM-target tests for multichat-platform (Node.js runtime).
//!
//! Tests request timeouts, query-string parsing, and the HTTP backend's
//! failure path under wasm32-unknown-unknown via `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use multichat_core::ports::BackendPort;
use gloo_net::http::Response;

use multichat_platform::backend::http::{reply_from_response, services_from_response};
use multichat_platform::backend::HttpBackend;
use multichat_platform::location::backend_url_from_query;
use multichat_platform::timeout::with_timeout;
use multichat_types::config::ClientConfig;
use multichat_types::persona::PersonaId;
use multichat_types::service::{ServiceAvailability, ServiceId, ServiceProbe};
use multichat_types::wire::ChatRequest;
use multichat_types::ChatError;

// ─── Timeout Tests ───────────────────────────────────────

#[wasm_bindgen_test]
async fn timeout_passes_through_ready_result() {
    let result = with_timeout(async { Ok::<_, ChatError>(7) }, 1_000).await;
    assert_eq!(result, Ok(7));
}

#[wasm_bindgen_test]
async fn timeout_passes_through_error() {
    let result: Result<(), ChatError> =
        with_timeout(async { Err(ChatError::MissingContent) }, 1_000).await;
    assert_eq!(result, Err(ChatError::MissingContent));
}

#[wasm_bindgen_test]
async fn timeout_expires_on_pending_future() {
    let result: Result<(), ChatError> = with_timeout(futures::future::pending(), 20).await;
    assert_eq!(result, Err(ChatError::Timeout(20)));
}

// ─── Query String Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn query_backend_param() {
    assert_eq!(
        backend_url_from_query("?backend=https%3A%2F%2Fapi.example.com"),
        Some("https://api.example.com".to_string())
    );
    assert_eq!(
        backend_url_from_query("?theme=dark&backend=http://localhost:9000"),
        Some("http://localhost:9000".to_string())
    );
}

#[wasm_bindgen_test]
fn query_without_backend_param() {
    assert_eq!(backend_url_from_query(""), None);
    assert_eq!(backend_url_from_query("?theme=dark"), None);
    assert_eq!(backend_url_from_query("?backend="), None);
}

// ─── HttpBackend Tests ───────────────────────────────────

fn unreachable_backend() -> HttpBackend {
    let mut config = ClientConfig::default().with_backend_override(Some("http://127.0.0.1:9"));
    config.request_timeout_ms = 2_000;
    HttpBackend::new(config)
}

#[wasm_bindgen_test]
fn http_backend_endpoint() {
    assert_eq!(unreachable_backend().endpoint(), "http://127.0.0.1:9");
}

#[wasm_bindgen_test]
async fn http_backend_probe_falls_back_when_unreachable() {
    let probe = unreachable_backend().fetch_services().await;
    assert!(!probe.is_reachable());
    assert_eq!(probe.availability, ServiceAvailability::fallback());
}

#[wasm_bindgen_test]
async fn http_backend_send_fails_when_unreachable() {
    let req = ChatRequest {
        message: "hello".to_string(),
        chatbot_type: PersonaId::News,
        service: ServiceId::Groq,
        history: Vec::new(),
    };
    let err = unreachable_backend().send_chat(req).await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_) | ChatError::Timeout(_)));
}

// ─── Response Decoding Tests ─────────────────────────────

fn response(status: u16, body: &str) -> Response {
    Response::builder().status(status).body(Some(body)).unwrap()
}

#[wasm_bindgen_test]
async fn services_response_decodes_map() {
    let availability = services_from_response(response(200, r#"{"groq":true,"databricks":false}"#))
        .await
        .unwrap();
    assert!(availability.is_available(ServiceId::Groq));
    assert!(!availability.is_available(ServiceId::Databricks));
}

#[wasm_bindgen_test]
async fn services_response_500_is_http_error() {
    let err = services_from_response(response(500, "boom")).await.unwrap_err();
    assert_eq!(
        err,
        ChatError::Http {
            status: 500,
            body: "boom".to_string()
        }
    );

    let probe = ServiceProbe::unreachable(&err);
    assert_eq!(probe.availability, ServiceAvailability::fallback());
    assert_eq!(
        probe.connection_error.as_deref(),
        Some("Cannot connect to backend: HTTP error! status: 500")
    );
}

#[wasm_bindgen_test]
async fn chat_response_decodes_reply() {
    let reply = reply_from_response(response(200, r#"{"content":"stories","model":"groq-llama"}"#))
        .await
        .unwrap();
    assert_eq!(reply.content, "stories");
    assert_eq!(reply.model.as_deref(), Some("groq-llama"));
}

#[wasm_bindgen_test]
async fn chat_response_errors() {
    let err = reply_from_response(response(503, "")).await.unwrap_err();
    assert!(matches!(err, ChatError::Http { status: 503, .. }));

    let err = reply_from_response(response(200, r#"{"model":"m"}"#)).await.unwrap_err();
    assert_eq!(err, ChatError::MissingContent);
}
