use super::index::DiseaseIndex;
use super::tokenize::tokenize;
use crate::format::display_name;
use crate::models::{ContentCategory, ContentField, DiseaseContent};
use crate::pipeline::messages::ReplyTemplates;
use crate::providers::KnowledgeBase;

/// Minimum overlap count for a guessed disease.
pub const MIN_GUESS_OVERLAP: usize = 3;

/// Category keyword groups, checked in order. First group present wins.
const CATEGORY_KEYWORDS: &[(ContentCategory, &[&str])] = &[
    (ContentCategory::Symptoms, &["symptom", "symptoms", "signs"]),
    (ContentCategory::Prevention, &["prevent", "prevention", "avoid"]),
    (
        ContentCategory::Remedies,
        &["treat", "treatment", "remedy", "remedies", "cure"],
    ),
];

/// A resolved disease and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseMatch {
    pub disease_id: String,
    /// `true` when the name appeared in the text, `false` for a guess.
    pub explicit: bool,
}

/// A knowledge base answer together with the disease it is about, so
/// callers never have to match the same text twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAnswer {
    pub disease: DiseaseMatch,
    pub text: String,
}

/// Two-tier disease matching over a knowledge base and its index.
pub struct DiseaseMatcher<'a> {
    knowledge: &'a KnowledgeBase,
    index: &'a DiseaseIndex,
}

impl<'a> DiseaseMatcher<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, index: &'a DiseaseIndex) -> Self {
        Self { knowledge, index }
    }

    /// First identifier (in knowledge base order) whose name, or name with
    /// `_`/`-` read as spaces, occurs in the lower-cased text. No ranking by
    /// specificity: `fever` listed before `dengue_fever` wins for
    /// "dengue fever".
    pub fn explicit_match(&self, text: &str) -> Option<&'a str> {
        let query = text.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.knowledge
            .iter()
            .map(|entry| entry.id.as_str())
            .filter(|id| !id.is_empty())
            .find(|id| {
                let low = id.to_lowercase();
                query.contains(&low)
                    || query.contains(&low.replace('_', " "))
                    || query.contains(&low.replace('-', " "))
            })
    }

    /// Indexed identifier sharing the most terms with the text. Ties keep
    /// the earliest maximum; anything below [`MIN_GUESS_OVERLAP`] is `None`.
    pub fn guess(&self, text: &str) -> Option<&'a str> {
        if self.index.is_empty() {
            return None;
        }

        let terms = tokenize(text);
        if terms.is_empty() {
            return None;
        }

        let mut best: Option<&'a str> = None;
        let mut best_overlap = 0;

        for (id, doc_terms) in self.index.iter() {
            let overlap = terms.intersection(doc_terms).count();
            if overlap > best_overlap {
                best_overlap = overlap;
                best = Some(id);
            }
        }

        if best_overlap < MIN_GUESS_OVERLAP {
            return None;
        }

        tracing::debug!(disease = ?best, overlap = best_overlap, "Guessed disease");
        best
    }

    /// Explicit match first; guess only when nothing is named.
    pub fn resolve(&self, text: &str) -> Option<DiseaseMatch> {
        if let Some(id) = self.explicit_match(text) {
            return Some(DiseaseMatch {
                disease_id: id.to_string(),
                explicit: true,
            });
        }

        self.guess(text).map(|id| DiseaseMatch {
            disease_id: id.to_string(),
            explicit: false,
        })
    }

    /// Knowledge base answer for `text`.
    ///
    /// Explicit matches get the full content section picked by category
    /// keywords; guesses only get a hedged note. `None` when nothing
    /// resolves or the resolved entry has no usable content.
    pub fn answer(&self, text: &str) -> Option<MatchedAnswer> {
        if self.knowledge.is_empty() || text.trim().is_empty() {
            return None;
        }

        let disease = self.resolve(text)?;
        let content = self.knowledge.get(&disease.disease_id)?.content.as_ref()?;
        let title = display_name(&disease.disease_id);

        let text = if disease.explicit {
            let category = detect_category(&text.to_lowercase());
            render_section(&title, content, category)?
        } else {
            ReplyTemplates::guessed_disease(&title)
        };

        Some(MatchedAnswer { disease, text })
    }
}

/// Category requested by the question; `About` when no keyword is present.
pub fn detect_category(lower: &str) -> ContentCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(ContentCategory::About)
}

/// Render one section, falling back to `About` when the requested field is
/// missing on the entry.
fn render_section(title: &str, content: &DiseaseContent, category: ContentCategory) -> Option<String> {
    let (category, field) = match content.field(category) {
        Some(field) => (category, field),
        None => (
            ContentCategory::About,
            content.field(ContentCategory::About)?,
        ),
    };

    let body = match field {
        ContentField::Text(text) => text.clone(),
        ContentField::Items(items) => items
            .iter()
            .map(|item| format!("• {item}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Some(format!("💡 *{title} – {}*\n{body}", category.heading()))
}
