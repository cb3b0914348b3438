use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

/// Upstream AI provider, chosen independently of the persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    Groq,
    Databricks,
}

impl ServiceId {
    pub fn all() -> &'static [ServiceId] {
        &[ServiceId::Groq, ServiceId::Databricks]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Groq => "groq",
            ServiceId::Databricks => "databricks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceId::Groq => "Groq",
            ServiceId::Databricks => "Databricks",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = ChatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ServiceId::all()
            .iter()
            .copied()
            .find(|svc| svc.as_str() == s)
            .ok_or_else(|| ChatError::UnknownService(s.to_string()))
    }
}

/// Service id → availability, as reported by `GET /api/v1/services`.
///
/// Keys the client does not know are kept so the map mirrors the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceAvailability(BTreeMap<String, bool>);

impl ServiceAvailability {
    /// Map used when the capability probe fails: every known service is
    /// assumed available so the selector stays usable.
    pub fn fallback() -> Self {
        ServiceId::all().iter().map(|s| (*s, true)).collect()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ChatError::Parse(e.to_string()))
    }

    /// Missing entries count as unavailable.
    pub fn is_available(&self, service: ServiceId) -> bool {
        self.0.get(service.as_str()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, service: ServiceId, available: bool) {
        self.0.insert(service.as_str().to_string(), available);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(ServiceId, bool)> for ServiceAvailability {
    fn from_iter<I: IntoIterator<Item = (ServiceId, bool)>>(iter: I) -> Self {
        let mut map = ServiceAvailability::default();
        for (service, available) in iter {
            map.set(service, available);
        }
        map
    }
}

/// Outcome of a capability probe. Availability and connection error travel
/// together so they can be applied to the session in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProbe {
    pub availability: ServiceAvailability,
    pub connection_error: Option<String>,
}

impl ServiceProbe {
    pub fn reachable(availability: ServiceAvailability) -> Self {
        Self {
            availability,
            connection_error: None,
        }
    }

    pub fn unreachable(error: &ChatError) -> Self {
        Self {
            availability: ServiceAvailability::fallback(),
            connection_error: Some(format!("Cannot connect to backend: {}", error)),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.connection_error.is_none()
    }
}
