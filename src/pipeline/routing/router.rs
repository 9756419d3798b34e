use super::rules::{RoutingRule, ROUTING_RULES};
use super::types::{Intent, IntentKind, RoutingContext};
use crate::pipeline::context::KnowledgeContext;
use crate::pipeline::messages::ReplyTemplates;

/// Picks exactly one intent per message by walking the rule table.
pub struct IntentRouter<'a> {
    knowledge: &'a KnowledgeContext,
    rules: &'a [RoutingRule],
}

impl<'a> IntentRouter<'a> {
    pub fn new(knowledge: &'a KnowledgeContext) -> Self {
        Self::with_rules(knowledge, ROUTING_RULES)
    }

    pub fn with_rules(knowledge: &'a KnowledgeContext, rules: &'a [RoutingRule]) -> Self {
        Self { knowledge, rules }
    }

    /// First rule that fires wins; `Fallback` when none do.
    pub fn route(&self, text: &str) -> Intent {
        let message = RoutingContext::new(text);

        for rule in self.rules {
            if let Some(intent) = (rule.apply)(&message, self.knowledge) {
                tracing::debug!(
                    rule = rule.name,
                    intent = ?intent.kind,
                    facilities = intent.facilities.len(),
                    "Message routed"
                );
                return intent;
            }
        }

        tracing::debug!(chars = message.trimmed.chars().count(), "No rule matched, falling back");
        Intent::new(IntentKind::Fallback, ReplyTemplates::fallback())
    }
}
