//! Facility suggestions for a resolved disease.
//!
//! Pure tag scoring over a fixed registry: the disease identifier implies a
//! set of tags through [`registry::KEYWORD_TAGS`], and each facility scores
//! one point per shared tag. No I/O, no mutation after construction.

pub mod registry;

use std::collections::HashSet;

use crate::models::Facility;

/// Tag that stands in for "general hospital" when nothing else matches.
const GENERAL_TAG: &str = "multispecialty";

// ─── Internal types ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct ScoredFacility<'a> {
    facility: &'a Facility,
    score: i32,
}

// ─── Recommender ─────────────────────────────────────────────────────────────

pub struct FacilityRecommender {
    facilities: Vec<Facility>,
    keyword_tags: &'static [(&'static str, &'static [&'static str])],
}

impl Default for FacilityRecommender {
    fn default() -> Self {
        Self::new(registry::kochi_facilities(), registry::KEYWORD_TAGS)
    }
}

impl FacilityRecommender {
    pub fn new(
        facilities: Vec<Facility>,
        keyword_tags: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        Self {
            facilities,
            keyword_tags,
        }
    }

    /// Union of the tags of every keyword contained in the identifier.
    pub fn implied_tags(&self, disease_id: &str) -> HashSet<&'static str> {
        let low = disease_id.to_lowercase();
        self.keyword_tags
            .iter()
            .filter(|(keyword, _)| low.contains(keyword))
            .flat_map(|(_, tags)| tags.iter().copied())
            .collect()
    }

    fn score(&self, facility: &Facility, implied: &HashSet<&'static str>) -> i32 {
        let shared = facility
            .tags
            .iter()
            .filter(|tag| implied.contains(tag.as_str()))
            .collect::<HashSet<_>>()
            .len() as i32;

        if implied.is_empty() && facility.has_tag(GENERAL_TAG) {
            shared + 1
        } else {
            shared
        }
    }

    /// Up to `limit` facilities for a disease, best first. Equal scores keep
    /// registry order. An empty identifier gets no suggestions.
    pub fn recommend(&self, disease_id: &str, limit: usize) -> Vec<Facility> {
        if disease_id.is_empty() {
            return Vec::new();
        }

        let implied = self.implied_tags(disease_id);

        let mut scored: Vec<ScoredFacility<'_>> = self
            .facilities
            .iter()
            .map(|facility| ScoredFacility {
                facility,
                score: self.score(facility, &implied),
            })
            .collect();

        // Stable: ties stay in registry order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let picked: Vec<Facility> = scored
            .into_iter()
            .filter(|s| s.score >= 0)
            .take(limit)
            .map(|s| s.facility.clone())
            .collect();

        tracing::debug!(
            disease = disease_id,
            tags = implied.len(),
            suggested = picked.len(),
            "Facilities recommended"
        );

        picked
    }
}
