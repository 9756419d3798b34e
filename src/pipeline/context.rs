//! The immutable state every request reads: knowledge base, its index, the
//! content providers and the facility recommender.

use super::routing::{self, ProcessedMessage};
use super::understanding::{DiseaseIndex, DiseaseMatcher};
use crate::config::AppConfig;
use crate::facilities::FacilityRecommender;
use crate::providers::{
    KnowledgeBase, LegacyDiseaseLookup, LegacyDiseaseTable, PreventiveModules, PreventiveSource,
    ProviderError, VaccinationSchedules, VaccinationSource,
};

/// Built once before serving and never mutated. A reload builds a new
/// context and swaps it in whole (see `CoreState`).
pub struct KnowledgeContext {
    knowledge: KnowledgeBase,
    index: DiseaseIndex,
    vaccinations: Box<dyn VaccinationSource>,
    preventive: Box<dyn PreventiveSource>,
    legacy: Box<dyn LegacyDiseaseLookup>,
    facilities: FacilityRecommender,
}

impl KnowledgeContext {
    /// Assemble a context and build the disease index.
    pub fn new(
        knowledge: KnowledgeBase,
        vaccinations: impl VaccinationSource + 'static,
        preventive: impl PreventiveSource + 'static,
        legacy: impl LegacyDiseaseLookup + 'static,
    ) -> Self {
        let index = DiseaseIndex::build(&knowledge);
        Self {
            knowledge,
            index,
            vaccinations: Box::new(vaccinations),
            preventive: Box::new(preventive),
            legacy: Box::new(legacy),
            facilities: FacilityRecommender::default(),
        }
    }

    /// Context with no content at all: every message greets, thanks or
    /// falls back.
    pub fn empty() -> Self {
        Self::new(
            KnowledgeBase::default(),
            VaccinationSchedules::default(),
            PreventiveModules::default(),
            LegacyDiseaseTable::default(),
        )
    }

    /// Load all four content stores from the configured data directory.
    pub fn load(config: &AppConfig) -> Result<Self, ProviderError> {
        let knowledge = KnowledgeBase::load(&config.knowledge_base_path())?;
        let vaccinations = VaccinationSchedules::load(&config.vaccination_path())?;
        let preventive = PreventiveModules::load(&config.preventive_path())?;
        let legacy = LegacyDiseaseTable::load(&config.legacy_disease_path())?;

        let context = Self::new(knowledge, vaccinations, preventive, legacy);
        tracing::info!(
            entries = context.knowledge.len(),
            indexed = context.index.len(),
            "Knowledge context ready"
        );
        Ok(context)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn index(&self) -> &DiseaseIndex {
        &self.index
    }

    pub fn matcher(&self) -> DiseaseMatcher<'_> {
        DiseaseMatcher::new(&self.knowledge, &self.index)
    }

    pub fn vaccinations(&self) -> &dyn VaccinationSource {
        self.vaccinations.as_ref()
    }

    pub fn preventive(&self) -> &dyn PreventiveSource {
        self.preventive.as_ref()
    }

    pub fn legacy(&self) -> &dyn LegacyDiseaseLookup {
        self.legacy.as_ref()
    }

    pub fn facilities(&self) -> &FacilityRecommender {
        &self.facilities
    }

    /// Route and compose a reply for one message.
    pub fn process(&self, text: &str) -> ProcessedMessage {
        routing::process(self, text)
    }

    /// Fixed content for tests (no file I/O).
    #[cfg(test)]
    pub fn load_test() -> Self {
        use serde_json::json;

        let knowledge = KnowledgeBase::from_json(&json!({
            "dengue": { "en": {
                "what": "Dengue is a viral infection spread by Aedes mosquitoes.",
                "symptoms": ["High fever", "Severe headache", "Pain behind the eyes", "Joint and muscle pain", "Skin rash"],
                "prevention": ["Use mosquito repellent", "Remove standing water around the house"],
                "remedies": ["Rest", "Drink plenty of fluids", "Paracetamol for fever"],
            }},
            "malaria": { "en": {
                "what": "Malaria is caused by Plasmodium parasites transmitted by mosquito bites.",
                "symptoms": ["Fever with chills", "Sweating", "Nausea and vomiting"],
                "prevention": ["Sleep under treated bed nets"],
            }},
            "heart_attack": { "en": {
                "what": "A heart attack happens when blood flow to the heart muscle is blocked.",
                "symptoms": ["Chest pain or pressure", "Shortness of breath", "Cold sweat"],
            }},
            "kidney-stones": { "en": {
                "what": "Hard deposits of minerals that form inside the kidneys.",
                "remedies": "Drink plenty of water and see a urologist for severe pain.",
            }},
            "empty_entry": { "en": {} },
            "no_english": { "ml": { "what": "..." } },
        }));

        let vaccinations = VaccinationSchedules::from_value(json!({
            "infant": [{ "age": "birth", "vaccines": ["BCG", "OPV-0", "Hep B-1"] }],
            "adult": [{ "vaccine": "Td", "frequency": "every 10 years" }],
        }));

        let preventive = PreventiveModules::from_pairs([
            ("hand hygiene", "🧼 Wash your hands with soap for at least 20 seconds."),
            ("exercise", "🏃 Aim for 150 minutes of moderate activity every week."),
        ]);

        let legacy = LegacyDiseaseTable::from_json(&json!({
            "typhoid": {
                "aliases": ["enteric fever"],
                "en": "Typhoid is a bacterial infection spread through contaminated food and water.",
            },
            "chikungunya": { "en": "Chikungunya causes fever and severe joint pain." },
        }));

        Self::new(knowledge, vaccinations, preventive, legacy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_indexes_only_entries_with_content() {
        let ctx = KnowledgeContext::load_test();
        assert_eq!(ctx.knowledge().len(), 6);
        assert_eq!(ctx.index().len(), 4);
        assert!(!ctx.index().contains("empty_entry"));
        assert!(!ctx.index().contains("no_english"));
    }

    #[test]
    fn load_from_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("db.json"),
            r#"{"dengue": {"en": {"symptoms": ["High fever", "Skin rash"]}}}"#,
        )
        .unwrap();
        std::fs::write(tmp.path().join("vaccinations.json"), r#"{"infant": []}"#).unwrap();

        let config = AppConfig {
            data_dir: tmp.path().to_path_buf(),
            ..AppConfig::default()
        };
        let ctx = KnowledgeContext::load(&config).unwrap();
        assert!(ctx.index().contains("dengue"));
        assert_eq!(ctx.vaccinations().schedules(), &json!({"infant": []}));
        assert_eq!(ctx.preventive().topics().count(), 0);
        assert!(ctx.legacy().find("typhoid").is_none());
    }

    #[test]
    fn bundled_data_loads() {
        let config = AppConfig {
            data_dir: std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
            ..AppConfig::default()
        };
        let ctx = KnowledgeContext::load(&config).unwrap();
        assert_eq!(ctx.index().len(), ctx.knowledge().len());
        assert!(ctx.vaccinations().schedules()["infant"].is_array());
        assert!(ctx.preventive().topics().count() > 0);
        assert!(ctx.legacy().find("rat fever after the flood").is_some());
    }

    #[test]
    fn load_fails_on_corrupt_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("preventive_health.json"), "[oops").unwrap();

        let config = AppConfig {
            data_dir: tmp.path().to_path_buf(),
            ..AppConfig::default()
        };
        assert!(matches!(
            KnowledgeContext::load(&config),
            Err(ProviderError::Parse(_, _))
        ));
    }

    #[test]
    fn empty_context_falls_back() {
        let ctx = KnowledgeContext::empty();
        let reply = ctx.process("dengue symptoms");
        assert_eq!(reply.kind, routing::IntentKind::Fallback);
    }
}
