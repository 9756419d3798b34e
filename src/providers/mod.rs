//! Read-only content stores consumed by the routing pipeline.
//!
//! The router only sees the narrow traits below. The concrete types in the
//! submodules load the stores from JSON files in the data directory; a
//! missing file yields an empty store, an unreadable or unparseable one is
//! a startup error.

pub mod knowledge_base;
pub mod legacy;
pub mod preventive;
pub mod vaccination;

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

pub use knowledge_base::KnowledgeBase;
pub use legacy::LegacyDiseaseTable;
pub use preventive::PreventiveModules;
pub use vaccination::VaccinationSchedules;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to read {0}: {1}")]
    Read(String, String),

    #[error("Failed to parse {0}: {1}")]
    Parse(String, String),
}

/// Vaccination schedules, forwarded to clients unmodified.
pub trait VaccinationSource: Send + Sync {
    fn schedules(&self) -> &Value;
}

/// Preventive-health topics: keyword → ready-made response text.
pub trait PreventiveSource: Send + Sync {
    /// Topics in their configured order.
    fn topics(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
}

/// Older disease lookup kept for coverage beyond the knowledge base.
pub trait LegacyDiseaseLookup: Send + Sync {
    fn find(&self, text: &str) -> Option<String>;
}

/// Read and parse a JSON file. `Ok(None)` when the file does not exist.
pub(crate) fn read_optional_json(path: &Path) -> Result<Option<Value>, ProviderError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Content file not found, starting empty");
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ProviderError::Read(path.display().to_string(), e.to_string()))?;
    let value = serde_json::from_str(&raw)
        .map_err(|e| ProviderError::Parse(file_label(path), e.to_string()))?;
    Ok(Some(value))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let result = read_optional_json(&tmp.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn invalid_json_is_parse_error_with_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("db.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_optional_json(&path).unwrap_err();
        match err {
            ProviderError::Parse(file, _) => assert_eq!(file, "db.json"),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn valid_json_is_returned() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("v.json");
        std::fs::write(&path, r#"{"infant": ["BCG"]}"#).unwrap();

        let value = read_optional_json(&path).unwrap().unwrap();
        assert_eq!(value["infant"][0], "BCG");
    }
}
