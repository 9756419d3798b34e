use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Facility;

/// The response strategy chosen for a message. Serialized with the names
/// clients already understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "greeting")]
    Greeting,
    #[serde(rename = "thanks")]
    Thanks,
    #[serde(rename = "db")]
    KnowledgeBaseAnswer,
    #[serde(rename = "vaccination")]
    Vaccination,
    #[serde(rename = "preventive")]
    Preventive,
    #[serde(rename = "disease")]
    LegacyDisease,
    #[serde(rename = "fallback")]
    Fallback,
}

/// What a routing rule produced, before composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub kind: IntentKind,
    pub answer: String,
    /// Structured payload forwarded verbatim (vaccination schedules).
    pub extra: Option<Value>,
    pub facilities: Vec<Facility>,
}

impl Intent {
    pub fn new(kind: IntentKind, answer: impl Into<String>) -> Self {
        Self {
            kind,
            answer: answer.into(),
            extra: None,
            facilities: Vec::new(),
        }
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn with_facilities(mut self, facilities: Vec<Facility>) -> Self {
        self.facilities = facilities;
        self
    }
}

/// Per-request view of the incoming text. Discarded after composition.
#[derive(Debug, Clone)]
pub struct RoutingContext<'t> {
    pub trimmed: &'t str,
    /// Lower-cased `trimmed`.
    pub lower: String,
}

impl<'t> RoutingContext<'t> {
    pub fn new(raw: &'t str) -> Self {
        let trimmed = raw.trim();
        Self {
            trimmed,
            lower: trimmed.to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}
