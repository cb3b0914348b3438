//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `multichat-core` (pure Rust).
//! Implementations live in `multichat-platform` (browser adapters).
//! The session never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use multichat_types::{
    Result,
    service::ServiceProbe,
    wire::{ChatReply, ChatRequest},
};

// ─── Backend Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait BackendPort {
    /// Probe `GET /api/v1/services`.
    ///
    /// Never fails: an unreachable backend yields the fallback availability
    /// map together with a connection error.
    async fn fetch_services(&self) -> ServiceProbe;

    /// Submit one chat turn to `POST /api/v1/chat`.
    async fn send_chat(&self, req: ChatRequest) -> Result<ChatReply>;

    /// Base URL this backend talks to, logged at startup.
    fn endpoint(&self) -> &str;
}
