//! The routing decision table.
//!
//! Each rule inspects the message (and, where needed, the knowledge context)
//! and either produces an intent or passes. Rules are evaluated strictly in
//! [`ROUTING_RULES`] order; the first one to produce an intent wins.

use super::types::{Intent, IntentKind, RoutingContext};
use crate::config::FACILITY_LIMIT;
use crate::pipeline::context::KnowledgeContext;
use crate::pipeline::messages::ReplyTemplates;

pub type RuleFn = fn(&RoutingContext<'_>, &KnowledgeContext) -> Option<Intent>;

pub struct RoutingRule {
    pub name: &'static str,
    pub apply: RuleFn,
}

pub const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "hai"];

/// Plain substrings of the lower-cased text. The short forms also fire
/// inside ordinary words ("empty", "typhoid").
pub const THANKS_KEYWORDS: &[&str] = &["thank", "thanks", "thank you", "thx", "ty"];

pub const VACCINATION_KEYWORDS: &[&str] = &["vaccine", "vaccination", "immunization"];

pub static ROUTING_RULES: &[RoutingRule] = &[
    RoutingRule {
        name: "blank",
        apply: blank_message,
    },
    RoutingRule {
        name: "greeting",
        apply: greeting,
    },
    RoutingRule {
        name: "thanks",
        apply: thanks,
    },
    RoutingRule {
        name: "knowledge_base",
        apply: knowledge_base,
    },
    RoutingRule {
        name: "vaccination",
        apply: vaccination,
    },
    RoutingRule {
        name: "preventive",
        apply: preventive,
    },
    RoutingRule {
        name: "legacy_disease",
        apply: legacy_disease,
    },
];

fn blank_message(message: &RoutingContext<'_>, _: &KnowledgeContext) -> Option<Intent> {
    message
        .is_blank()
        .then(|| Intent::new(IntentKind::Greeting, ReplyTemplates::greeting()))
}

fn greeting(message: &RoutingContext<'_>, _: &KnowledgeContext) -> Option<Intent> {
    let lower = message.lower.as_str();
    GREETING_WORDS
        .iter()
        .any(|g| {
            lower == *g
                || lower
                    .strip_prefix(g)
                    .is_some_and(|rest| rest.starts_with(' '))
        })
        .then(|| Intent::new(IntentKind::Greeting, ReplyTemplates::greeting()))
}

fn thanks(message: &RoutingContext<'_>, _: &KnowledgeContext) -> Option<Intent> {
    THANKS_KEYWORDS
        .iter()
        .any(|k| message.lower.contains(k))
        .then(|| Intent::new(IntentKind::Thanks, ReplyTemplates::thanks()))
}

fn knowledge_base(message: &RoutingContext<'_>, knowledge: &KnowledgeContext) -> Option<Intent> {
    let answer = knowledge.matcher().answer(message.trimmed)?;
    let facilities = knowledge
        .facilities()
        .recommend(&answer.disease.disease_id, FACILITY_LIMIT);

    Some(Intent::new(IntentKind::KnowledgeBaseAnswer, answer.text).with_facilities(facilities))
}

fn vaccination(message: &RoutingContext<'_>, knowledge: &KnowledgeContext) -> Option<Intent> {
    VACCINATION_KEYWORDS
        .iter()
        .any(|k| message.lower.contains(k))
        .then(|| {
            Intent::new(IntentKind::Vaccination, ReplyTemplates::vaccination())
                .with_extra(knowledge.vaccinations().schedules().clone())
        })
}

fn preventive(message: &RoutingContext<'_>, knowledge: &KnowledgeContext) -> Option<Intent> {
    knowledge
        .preventive()
        .topics()
        .find(|(topic, _)| message.lower.contains(topic))
        .map(|(_, text)| Intent::new(IntentKind::Preventive, text))
}

/// Facilities here are best effort: only a guessed disease can supply them.
fn legacy_disease(message: &RoutingContext<'_>, knowledge: &KnowledgeContext) -> Option<Intent> {
    let info = knowledge
        .legacy()
        .find(message.trimmed)
        .filter(|text| !text.trim().is_empty())?;

    let facilities = knowledge
        .matcher()
        .guess(message.trimmed)
        .map(|id| knowledge.facilities().recommend(id, FACILITY_LIMIT))
        .unwrap_or_default();

    Some(
        Intent::new(IntentKind::LegacyDisease, ReplyTemplates::legacy_disease(&info))
            .with_facilities(facilities),
    )
}
