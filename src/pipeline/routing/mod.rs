//! Intent routing and response composition.
//!
//! `process` is the single entry point used by every transport: it routes
//! the text to one intent and composes the reply.

pub mod compose;
pub mod router;
pub mod rules;
pub mod types;

pub use compose::{ProcessedMessage, ResponseComposer};
pub use router::IntentRouter;
pub use types::{Intent, IntentKind, RoutingContext};

use crate::pipeline::context::KnowledgeContext;

pub fn process(knowledge: &KnowledgeContext, text: &str) -> ProcessedMessage {
    let intent = IntentRouter::new(knowledge).route(text);
    ResponseComposer::compose(intent)
}
