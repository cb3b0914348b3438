//! Chat session: the state machine behind the chat window.
//!
//! Owns the message log, persona/service selection, and the two error
//! fields. A send cycle runs `Idle → Sending → {Success, Failure} → Idle`:
//! 1. `begin_send` validates, appends the user message, sets in-flight
//! 2. the caller awaits the backend without holding a borrow on the session
//! 3. `finish_send` appends the reply (or an apology) and clears in-flight
//!
//! Overlapping sends are rejected, never queued.

use multichat_types::{
    ChatError, Result,
    config::ClientConfig,
    event::SessionEvent,
    message::Message,
    persona::{PersonaId, welcome_message},
    service::{ServiceAvailability, ServiceId, ServiceProbe},
    wire::{ChatReply, ChatRequest, history_window},
};
use crate::event_bus::EventBus;
use crate::ports::BackendPort;

/// A dispatched chat turn awaiting its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub request: ChatRequest,
}

pub struct ChatSession {
    persona: PersonaId,
    service: ServiceId,
    messages: Vec<Message>,
    /// Turn currently awaiting a reply; `Some` exactly while in flight
    pending_turn: Option<u64>,
    api_error: Option<String>,
    connection_error: Option<String>,
    available_services: ServiceAvailability,
    probing: bool,
    event_bus: EventBus,
    turn_counter: u64,
}

impl ChatSession {
    pub fn new(persona: PersonaId, service: ServiceId, event_bus: EventBus) -> Self {
        Self {
            persona,
            service,
            messages: vec![Message::assistant(persona.welcome_message())],
            pending_turn: None,
            api_error: None,
            connection_error: None,
            available_services: ServiceAvailability::default(),
            probing: false,
            event_bus,
            turn_counter: 0,
        }
    }

    pub fn from_config(config: &ClientConfig, event_bus: EventBus) -> Self {
        Self::new(config.default_persona, config.default_service, event_bus)
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn persona(&self) -> PersonaId {
        self.persona
    }

    pub fn service(&self) -> ServiceId {
        self.service
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending_turn.is_some()
    }

    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    pub fn connection_error(&self) -> Option<&str> {
        self.connection_error.as_deref()
    }

    pub fn available_services(&self) -> &ServiceAvailability {
        &self.available_services
    }

    pub fn is_probing(&self) -> bool {
        self.probing
    }

    /// Input is disabled while the backend is known to be unreachable.
    pub fn input_enabled(&self) -> bool {
        self.connection_error.is_none()
    }

    pub fn can_send(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_in_flight() && self.input_enabled()
    }

    // ─── Persona / service selection ─────────────────────────

    /// Switch persona by its wire id.
    pub fn set_persona(&mut self, id: &str) -> Result<()> {
        let persona = id.parse::<PersonaId>()?;
        self.switch_persona(persona);
        Ok(())
    }

    /// Full session reset: the log becomes a single welcome message.
    /// Re-selecting the active persona changes nothing.
    ///
    /// A turn still in flight is abandoned; its reply will be discarded by
    /// `finish_send`. The connection error is kept since it reflects backend
    /// reachability, not persona state.
    pub fn switch_persona(&mut self, persona: PersonaId) {
        if persona == self.persona {
            return;
        }
        if let Some(turn_id) = self.pending_turn.take() {
            log::info!("Abandoning turn {} on persona switch", turn_id);
        }
        self.persona = persona;
        self.api_error = None;
        self.messages = vec![Message::assistant(welcome_message(persona.as_str()))];
        log::info!("Persona switched to {}", persona);
        self.event_bus.emit(SessionEvent::PersonaSwitched { persona });
    }

    /// Select the upstream service. Services not marked available by the
    /// last probe are refused and the selection is left unchanged.
    pub fn set_service(&mut self, service: ServiceId) -> Result<()> {
        if service == self.service {
            return Ok(());
        }
        if !self.available_services.is_available(service) {
            log::warn!("Refusing to select unavailable service {}", service);
            return Err(ChatError::ServiceUnavailable(service.to_string()));
        }
        self.service = service;
        self.event_bus.emit(SessionEvent::ServiceSelected { service });
        Ok(())
    }

    // ─── Send cycle ──────────────────────────────────────────

    /// Start a chat turn. Returns `None` (and changes nothing) when the text
    /// is blank, a turn is already in flight, or the backend is unreachable.
    /// The text is logged and sent exactly as given.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingTurn> {
        if !self.can_send(text) {
            return None;
        }

        // History is taken before the user message is appended
        let history = history_window(&self.messages);
        self.messages.push(Message::user(text));

        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.pending_turn = Some(turn_id);
        self.api_error = None;
        self.event_bus.emit(SessionEvent::TurnStart { turn_id });

        Some(PendingTurn {
            turn_id,
            request: ChatRequest {
                message: text.to_string(),
                chatbot_type: self.persona,
                service: self.service,
                history,
            },
        })
    }

    /// Complete a chat turn with the backend's result.
    ///
    /// Returns `false` when `turn_id` is no longer the pending turn (the
    /// persona was switched meanwhile) and the result was discarded.
    pub fn finish_send(&mut self, turn_id: u64, result: Result<ChatReply>) -> bool {
        if self.pending_turn != Some(turn_id) {
            log::info!("Discarding stale reply for turn {}", turn_id);
            return false;
        }

        match result {
            Ok(reply) => {
                let model = reply
                    .model
                    .unwrap_or_else(|| self.service.as_str().to_string());
                self.event_bus.emit(SessionEvent::ReplyReceived {
                    turn_id,
                    model: model.clone(),
                });
                self.messages.push(Message::reply(reply.content, model));
            }
            Err(e) => {
                log::error!("Chat turn {} failed: {}", turn_id, e);
                let message = e.to_string();
                self.event_bus.emit(SessionEvent::TurnFailed {
                    turn_id,
                    message: message.clone(),
                });
                self.api_error = Some(message);
                self.messages.push(Message::apology());
            }
        }

        self.pending_turn = None;
        self.event_bus.emit(SessionEvent::TurnEnd { turn_id });
        true
    }

    /// Run a whole send cycle against `backend`. Returns whether the send was
    /// accepted.
    pub async fn send(&mut self, text: &str, backend: &dyn BackendPort) -> bool {
        let Some(PendingTurn { turn_id, request }) = self.begin_send(text) else {
            return false;
        };
        let result = backend.send_chat(request).await;
        self.finish_send(turn_id, result);
        true
    }

    /// Clear the API-level error. Returns whether anything changed.
    pub fn dismiss_api_error(&mut self) -> bool {
        self.api_error.take().is_some()
    }

    // ─── Connection probe ────────────────────────────────────

    /// Mark a probe as running. Returns `false` if one already is.
    pub fn begin_probe(&mut self) -> bool {
        if self.probing {
            return false;
        }
        self.probing = true;
        self.event_bus.emit(SessionEvent::ProbeStart);
        true
    }

    /// Apply a probe result: availability and connection error change together.
    pub fn finish_probe(&mut self, probe: ServiceProbe) {
        let ServiceProbe {
            availability,
            connection_error,
        } = probe;

        self.available_services = availability;
        self.connection_error = connection_error;
        self.probing = false;

        match &self.connection_error {
            None => {
                if !self.available_services.is_available(self.service) {
                    log::warn!("Selected service {} is reported unavailable", self.service);
                }
                self.event_bus.emit(SessionEvent::ConnectionRestored);
            }
            Some(message) => {
                self.event_bus.emit(SessionEvent::ConnectionLost {
                    message: message.clone(),
                });
            }
        }
    }

    /// Probe the backend and apply the result.
    pub async fn check_connection(&mut self, backend: &dyn BackendPort) {
        if !self.begin_probe() {
            return;
        }
        let probe = backend.fetch_services().await;
        self.finish_probe(probe);
    }
}
