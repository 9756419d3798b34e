use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::{read_optional_json, ProviderError};
use crate::models::DiseaseEntry;

/// The FAQ knowledge base: disease identifier → entry, in file order.
///
/// Order matters: explicit disease matching takes the first identifier
/// that appears in the question.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: IndexMap<String, DiseaseEntry>,
}

impl KnowledgeBase {
    pub fn from_entries(entries: impl IntoIterator<Item = DiseaseEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    /// Build from the raw `db.json` value. Anything other than a top-level
    /// object yields an empty knowledge base.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::warn!("Knowledge base root is not an object, ignoring");
            return Self::default();
        };

        Self::from_entries(
            object
                .iter()
                .map(|(id, raw)| DiseaseEntry::from_value(id, raw)),
        )
    }

    /// Load `db.json`. A missing file is an empty knowledge base.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let kb = read_optional_json(path)?
            .map(|value| Self::from_json(&value))
            .unwrap_or_default();
        tracing::info!(entries = kb.len(), "Knowledge base loaded");
        Ok(kb)
    }

    pub fn get(&self, id: &str) -> Option<&DiseaseEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiseaseEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
