//! Static persona catalogue.
//!
//! Personas are compile-time configuration: the set is closed and every
//! entry carries its display metadata and welcome text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChatError;

/// Identifier of an assistant persona, sent to the backend as `chatbot_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    News,
    Personal,
    Creative,
    Technical,
}

impl PersonaId {
    pub fn all() -> &'static [PersonaId] {
        &[
            PersonaId::News,
            PersonaId::Personal,
            PersonaId::Creative,
            PersonaId::Technical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::News => "news",
            PersonaId::Personal => "personal",
            PersonaId::Creative => "creative",
            PersonaId::Technical => "technical",
        }
    }

    /// Display metadata for this persona.
    pub fn persona(&self) -> &'static Persona {
        match self {
            PersonaId::News => &PERSONAS[0],
            PersonaId::Personal => &PERSONAS[1],
            PersonaId::Creative => &PERSONAS[2],
            PersonaId::Technical => &PERSONAS[3],
        }
    }

    pub fn welcome_message(&self) -> &'static str {
        welcome_message(self.as_str())
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaId {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ChatError::UnknownPersona(s.to_string()))
    }
}

/// Colour theme token; the UI maps each to a pair of gradient colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    BluePurple,
    GreenTeal,
    PinkRose,
    OrangeRed,
}

impl ColorTheme {
    pub fn token(&self) -> &'static str {
        match self {
            ColorTheme::BluePurple => "blue-purple",
            ColorTheme::GreenTeal => "green-teal",
            ColorTheme::PinkRose => "pink-rose",
            ColorTheme::OrangeRed => "orange-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub id: PersonaId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: ColorTheme,
}

pub static PERSONAS: [Persona; 4] = [
    Persona {
        id: PersonaId::News,
        name: "News Assistant",
        description: "Get the latest news and updates",
        icon: "📰",
        color: ColorTheme::BluePurple,
    },
    Persona {
        id: PersonaId::Personal,
        name: "Personal Assistant",
        description: "Your helpful personal companion",
        icon: "🤝",
        color: ColorTheme::GreenTeal,
    },
    Persona {
        id: PersonaId::Creative,
        name: "Creative Assistant",
        description: "Spark your creativity and imagination",
        icon: "🎨",
        color: ColorTheme::PinkRose,
    },
    Persona {
        id: PersonaId::Technical,
        name: "Technical Assistant",
        description: "Get technical help and coding assistance",
        icon: "💻",
        color: ColorTheme::OrangeRed,
    },
];

pub const GENERIC_WELCOME: &str = "Hello! How can I assist you today?";

/// Welcome text keyed by persona id; unknown ids get the generic greeting.
pub fn welcome_message(id: &str) -> &'static str {
    match id {
        "news" => "Hello! I'm your News Assistant. I can help you get the latest news updates. What would you like to know about today's news?",
        "personal" => "Hi there! I'm your Personal Assistant. How can I help you today? Whether it's advice, planning, or just conversation, I'm here for you!",
        "creative" => "Greetings! I'm your Creative Assistant. Ready to spark some creativity? Let's brainstorm, write, or create something amazing together!",
        "technical" => "Hello! I'm your Technical Assistant. I can help with coding, technical explanations, and problem-solving. What would you like to work on?",
        _ => GENERIC_WELCOME,
    }
}
