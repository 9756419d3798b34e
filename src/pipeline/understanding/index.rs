use indexmap::IndexMap;

use super::tokenize::{tokenize, TermSet};
use crate::providers::KnowledgeBase;

/// Disease identifier → significant terms of all its content fields.
///
/// Built once from the knowledge base and never mutated afterwards. An
/// identifier is present iff its content yields at least one term.
/// Iteration follows knowledge base order.
#[derive(Debug, Clone, Default)]
pub struct DiseaseIndex {
    docs: IndexMap<String, TermSet>,
}

impl DiseaseIndex {
    pub fn build(knowledge: &KnowledgeBase) -> Self {
        let docs: IndexMap<String, TermSet> = knowledge
            .iter()
            .filter_map(|entry| {
                let content = entry.content.as_ref()?;
                let terms = tokenize(&content.document());
                (!terms.is_empty()).then(|| (entry.id.clone(), terms))
            })
            .collect();

        tracing::debug!(
            indexed = docs.len(),
            entries = knowledge.len(),
            "Disease index built"
        );

        Self { docs }
    }

    pub fn terms(&self, disease_id: &str) -> Option<&TermSet> {
        self.docs.get(disease_id)
    }

    pub fn contains(&self, disease_id: &str) -> bool {
        self.docs.contains_key(disease_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermSet)> {
        self.docs.iter().map(|(id, terms)| (id.as_str(), terms))
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase::from_json(&json!({
            "dengue": { "en": {
                "what": "Dengue is a viral infection.",
                "symptoms": ["High fever", "Skin rash"],
            }},
            "only_stopwords": { "en": { "what": "what is the" } },
            "empty_block": { "en": {} },
            "no_english": { "ml": { "what": "ഡെങ്കി" } },
            "malformed": { "en": { "what": 5, "remedies": ["Rest", 9] } },
        }))
    }

    #[test]
    fn indexes_entries_with_terms() {
        let index = DiseaseIndex::build(&knowledge());
        let dengue = index.terms("dengue").unwrap();
        for term in ["dengue", "viral", "infection", "high", "fever", "skin", "rash"] {
            assert!(dengue.contains(term), "missing {term}");
        }
        assert!(!dengue.contains("is"));
    }

    #[test]
    fn omits_entries_without_terms() {
        let index = DiseaseIndex::build(&knowledge());
        assert!(!index.contains("only_stopwords"));
        assert!(!index.contains("empty_block"));
        assert!(!index.contains("no_english"));
    }

    #[test]
    fn malformed_fields_do_not_block_indexing() {
        let index = DiseaseIndex::build(&knowledge());
        let terms = index.terms("malformed").unwrap();
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("rest"));
    }

    #[test]
    fn follows_knowledge_base_order() {
        let index = DiseaseIndex::build(&knowledge());
        let ids: Vec<&str> = index.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["dengue", "malformed"]);
    }

    #[test]
    fn empty_knowledge_base_gives_empty_index() {
        assert!(DiseaseIndex::build(&KnowledgeBase::default()).is_empty());
    }
}
