use serde::Serialize;
use serde_json::Value;

/// The only language block read from the knowledge base.
pub const CONTENT_LANGUAGE: &str = "en";

/// A content field: free text or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentField {
    Text(String),
    Items(Vec<String>),
}

impl ContentField {
    /// Lenient conversion from raw JSON. Strings and arrays are accepted;
    /// non-string array elements are dropped; any other shape is absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Array(items) => Some(Self::Items(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Flatten into a single space-joined string.
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Items(items) => items.join(" "),
        }
    }
}

/// Which part of a disease entry a question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    About,
    Symptoms,
    Prevention,
    Remedies,
}

impl ContentCategory {
    /// Field order used when building index documents.
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::About,
        ContentCategory::Symptoms,
        ContentCategory::Prevention,
        ContentCategory::Remedies,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Symptoms => "Symptoms",
            Self::Prevention => "Prevention",
            Self::Remedies => "Remedies",
        }
    }

    /// JSON keys accepted for this field, in preference order.
    fn keys(self) -> &'static [&'static str] {
        match self {
            Self::About => &["what", "about"],
            Self::Symptoms => &["symptoms"],
            Self::Prevention => &["prevention"],
            Self::Remedies => &["remedies"],
        }
    }
}

/// The `en` content block of a disease entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseContent {
    pub about: Option<ContentField>,
    pub symptoms: Option<ContentField>,
    pub prevention: Option<ContentField>,
    pub remedies: Option<ContentField>,
}

impl DiseaseContent {
    /// Read the four fields from a language block. A block that is not a
    /// JSON object yields empty content.
    pub fn from_value(block: &Value) -> Self {
        let Some(object) = block.as_object() else {
            return Self::default();
        };

        let read = |category: ContentCategory| {
            category
                .keys()
                .iter()
                .find_map(|key| object.get(*key).and_then(ContentField::from_value))
        };

        Self {
            about: read(ContentCategory::About),
            symptoms: read(ContentCategory::Symptoms),
            prevention: read(ContentCategory::Prevention),
            remedies: read(ContentCategory::Remedies),
        }
    }

    pub fn field(&self, category: ContentCategory) -> Option<&ContentField> {
        match category {
            ContentCategory::About => self.about.as_ref(),
            ContentCategory::Symptoms => self.symptoms.as_ref(),
            ContentCategory::Prevention => self.prevention.as_ref(),
            ContentCategory::Remedies => self.remedies.as_ref(),
        }
    }

    /// All present fields concatenated into one document string.
    pub fn document(&self) -> String {
        ContentCategory::ALL
            .iter()
            .filter_map(|category| self.field(*category))
            .map(ContentField::joined)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One knowledge base entry. `content` is `None` when the entry has no
/// usable `en` block; such an entry can still be named explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub id: String,
    pub content: Option<DiseaseContent>,
}

impl DiseaseEntry {
    pub fn new(id: impl Into<String>, content: Option<DiseaseContent>) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Build from the raw `{ "en": { ... }, "ml": { ... } }` value.
    pub fn from_value(id: &str, value: &Value) -> Self {
        let content = value
            .get(CONTENT_LANGUAGE)
            .filter(|block| block.is_object())
            .map(DiseaseContent::from_value);
        Self::new(id, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_field_accepts_string_and_list() {
        assert_eq!(
            ContentField::from_value(&json!("High fever")),
            Some(ContentField::Text("High fever".into()))
        );
        assert_eq!(
            ContentField::from_value(&json!(["Rest", "Fluids"])),
            Some(ContentField::Items(vec!["Rest".into(), "Fluids".into()]))
        );
    }

    #[test]
    fn content_field_rejects_other_shapes() {
        assert_eq!(ContentField::from_value(&json!(42)), None);
        assert_eq!(ContentField::from_value(&json!({"a": "b"})), None);
        assert_eq!(ContentField::from_value(&Value::Null), None);
    }

    #[test]
    fn content_field_drops_non_string_items() {
        let field = ContentField::from_value(&json!(["Rest", 3, null, "Fluids"])).unwrap();
        assert_eq!(field.joined(), "Rest Fluids");
    }

    #[test]
    fn about_reads_what_key_first() {
        let content = DiseaseContent::from_value(&json!({
            "what": "From what",
            "about": "From about",
        }));
        assert_eq!(content.about, Some(ContentField::Text("From what".into())));

        let content = DiseaseContent::from_value(&json!({ "about": "Only about" }));
        assert_eq!(content.about, Some(ContentField::Text("Only about".into())));
    }

    #[test]
    fn malformed_field_is_absent_not_fatal() {
        let content = DiseaseContent::from_value(&json!({
            "what": "Dengue is viral",
            "symptoms": 17,
            "remedies": ["Rest"],
        }));
        assert!(content.symptoms.is_none());
        assert_eq!(content.document(), "Dengue is viral Rest");
    }

    #[test]
    fn entry_without_en_block_has_no_content() {
        let entry = DiseaseEntry::from_value("dengue", &json!({ "ml": { "what": "..." } }));
        assert_eq!(entry.id, "dengue");
        assert!(entry.content.is_none());

        let entry = DiseaseEntry::from_value("dengue", &json!({ "en": "not an object" }));
        assert!(entry.content.is_none());
    }

    #[test]
    fn headings_match_categories() {
        assert_eq!(ContentCategory::About.heading(), "About");
        assert_eq!(ContentCategory::Remedies.heading(), "Remedies");
    }
}
