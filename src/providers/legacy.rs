use std::path::Path;

use serde_json::Value;

use super::{read_optional_json, LegacyDiseaseLookup, ProviderError};
use crate::models::CONTENT_LANGUAGE;

/// One disease from the older lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyDisease {
    /// Lower-cased name and aliases; any of them in the question is a hit.
    pub names: Vec<String>,
    pub text: String,
}

/// Name/alias → short description table, searched in file order.
///
/// File shape: `{ "typhoid": { "aliases": ["enteric fever"], "en": "..." } }`.
#[derive(Debug, Clone, Default)]
pub struct LegacyDiseaseTable {
    diseases: Vec<LegacyDisease>,
}

impl LegacyDiseaseTable {
    pub fn new(diseases: Vec<LegacyDisease>) -> Self {
        Self { diseases }
    }

    /// Entries without an `en` text are skipped.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::warn!("Legacy disease table root is not an object, ignoring");
            return Self::default();
        };

        let diseases = object
            .iter()
            .filter_map(|(name, raw)| {
                let text = raw.get(CONTENT_LANGUAGE)?.as_str()?.to_string();
                let mut names = vec![name.to_lowercase()];
                if let Some(aliases) = raw.get("aliases").and_then(Value::as_array) {
                    names.extend(
                        aliases
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_lowercase),
                    );
                }
                names.retain(|n| !n.trim().is_empty());
                Some(LegacyDisease { names, text })
            })
            .collect();

        Self { diseases }
    }

    /// Load `diseases_multilang.json`. A missing file has no entries.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let table = read_optional_json(path)?
            .map(|value| Self::from_json(&value))
            .unwrap_or_default();
        tracing::info!(diseases = table.len(), "Legacy disease table loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

impl LegacyDiseaseLookup for LegacyDiseaseTable {
    fn find(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        self.diseases
            .iter()
            .find(|d| d.names.iter().any(|n| lower.contains(n.as_str())))
            .map(|d| d.text.clone())
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> LegacyDiseaseTable {
        LegacyDiseaseTable::from_json(&json!({
            "typhoid": {
                "aliases": ["enteric fever"],
                "en": "Typhoid is a bacterial infection spread through contaminated food and water.",
                "ml": "...",
            },
            "chikungunya": { "en": "Chikungunya causes fever and severe joint pain." },
            "jaundice": { "ml": "only malayalam" },
        }))
    }

    #[test]
    fn finds_by_name_case_insensitive() {
        let found = table().find("Tell me about TYPHOID").unwrap();
        assert!(found.starts_with("Typhoid is"));
    }

    #[test]
    fn finds_by_alias() {
        assert!(table().find("is enteric fever serious").is_some());
    }

    #[test]
    fn entries_without_english_text_are_skipped() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert!(table.find("jaundice").is_none());
    }

    #[test]
    fn blank_text_is_not_a_hit() {
        let table = LegacyDiseaseTable::new(vec![LegacyDisease {
            names: vec!["flu".into()],
            text: "   ".into(),
        }]);
        assert!(table.find("flu").is_none());
    }
}
