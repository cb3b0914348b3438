//! UI-level state that drives rendering.
//! Session data is read straight from `ChatSession`; this only holds what the
//! session does not own (input text, status line, panel toggles), updated each
//! frame by draining the EventBus.

use multichat_types::event::SessionEvent;
use multichat_types::persona::PersonaId;
use multichat_types::service::ServiceId;

/// User intents forwarded from the panels to the app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    SelectPersona(PersonaId),
    SelectService(ServiceId),
    Send(String),
    DismissApiError,
    RetryConnection,
}

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Whether the persona list is collapsed
    pub personas_collapsed: bool,
    /// Status line text
    pub status_text: String,
    /// Model that produced the latest reply
    pub last_model: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            personas_collapsed: false,
            status_text: "Ready".to_string(),
            last_model: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::PersonaSwitched { persona } => {
                    self.input_text.clear();
                    self.last_model = None;
                    self.status_text = format!("Switched to {}", persona.persona().name);
                }
                SessionEvent::ServiceSelected { service } => {
                    self.status_text = format!("Using {}", service.label());
                }
                SessionEvent::TurnStart { .. } => {
                    self.status_text = "Thinking...".to_string();
                }
                SessionEvent::ReplyReceived { model, .. } => {
                    self.status_text = "Ready".to_string();
                    self.last_model = Some(model);
                }
                SessionEvent::TurnFailed { message, .. } => {
                    self.status_text = format!("Error: {}", message);
                }
                SessionEvent::TurnEnd { .. } => {}
                SessionEvent::ProbeStart => {
                    self.status_text = "Testing connection...".to_string();
                }
                SessionEvent::ConnectionRestored => {
                    self.status_text = "Ready".to_string();
                }
                SessionEvent::ConnectionLost { .. } => {
                    self.status_text = "Offline".to_string();
                }
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
