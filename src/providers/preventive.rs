use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::{read_optional_json, PreventiveSource, ProviderError};

/// Preventive-health modules keyed by topic keyword.
#[derive(Debug, Clone, Default)]
pub struct PreventiveModules {
    modules: IndexMap<String, String>,
}

impl PreventiveModules {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            modules: pairs
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .filter(|(k, _)| !k.trim().is_empty())
                .collect(),
        }
    }

    /// Topics with a non-string text are skipped.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::warn!("Preventive modules root is not an object, ignoring");
            return Self::default();
        };
        Self::from_pairs(
            object
                .iter()
                .filter_map(|(key, text)| text.as_str().map(|t| (key.as_str(), t))),
        )
    }

    /// Load `preventive_health.json`. A missing file has no topics.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let modules = read_optional_json(path)?
            .map(|value| Self::from_json(&value))
            .unwrap_or_default();
        tracing::info!(topics = modules.len(), "Preventive modules loaded");
        Ok(modules)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl PreventiveSource for PreventiveModules {
    fn topics(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(
            self.modules
                .iter()
                .map(|(key, text)| (key.as_str(), text.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topics_keep_file_order_and_lowercase_keys() {
        let modules = PreventiveModules::from_json(&json!({
            "Hand Hygiene": "Wash hands with soap for 20 seconds.",
            "exercise": "Aim for 150 minutes a week.",
        }));
        let topics: Vec<(&str, &str)> = modules.topics().collect();
        assert_eq!(topics[0].0, "hand hygiene");
        assert_eq!(topics[1], ("exercise", "Aim for 150 minutes a week."));
    }

    #[test]
    fn non_string_text_is_skipped() {
        let modules = PreventiveModules::from_json(&json!({
            "diet": { "nested": true },
            "sleep": "Sleep 7-9 hours.",
        }));
        assert_eq!(modules.len(), 1);
    }

    #[test]
    fn blank_keys_are_dropped() {
        let modules = PreventiveModules::from_pairs([("  ", "ignored"), ("sleep", "Rest")]);
        assert_eq!(modules.len(), 1);
    }
}
