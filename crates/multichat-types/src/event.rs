use serde::{Deserialize, Serialize};

use crate::persona::PersonaId;
use crate::service::ServiceId;

/// Events emitted by the chat session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The log was reset for a new persona
    PersonaSwitched { persona: PersonaId },

    ServiceSelected { service: ServiceId },

    /// A chat request was dispatched
    TurnStart { turn_id: u64 },

    /// The backend answered
    ReplyReceived { turn_id: u64, model: String },

    /// The turn failed; an apology was appended
    TurnFailed { turn_id: u64, message: String },

    /// In-flight flag cleared
    TurnEnd { turn_id: u64 },

    ProbeStart,

    ConnectionRestored,

    ConnectionLost { message: String },
}
