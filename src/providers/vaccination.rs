use std::path::Path;

use serde_json::{Map, Value};

use super::{read_optional_json, ProviderError, VaccinationSource};

/// Vaccination schedule payload (infant, child, adult), opaque to the router.
#[derive(Debug, Clone)]
pub struct VaccinationSchedules {
    payload: Value,
}

impl Default for VaccinationSchedules {
    fn default() -> Self {
        Self {
            payload: Value::Object(Map::new()),
        }
    }
}

impl VaccinationSchedules {
    pub fn from_value(payload: Value) -> Self {
        Self { payload }
    }

    /// Load `vaccinations.json`. A missing file is an empty object.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        Ok(read_optional_json(path)?
            .map(Self::from_value)
            .unwrap_or_default())
    }
}

impl VaccinationSource for VaccinationSchedules {
    fn schedules(&self) -> &Value {
        &self.payload
    }
}
