//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind every transport (HTTP chat,
//! WhatsApp webhook). Requests take a snapshot of the current knowledge
//! context and work on it without holding any lock.

use std::sync::{Arc, RwLock};

use crate::config::AppConfig;
use crate::pipeline::context::KnowledgeContext;
use crate::pipeline::routing::ProcessedMessage;
use crate::providers::ProviderError;

// ═══════════════════════════════════════════════════════════
// CoreState — shared by every transport
// ═══════════════════════════════════════════════════════════

/// Wrapped in `Arc` at startup and handed to the router.
pub struct CoreState {
    /// Current knowledge context. Replaced whole on reload, never mutated.
    knowledge: RwLock<Arc<KnowledgeContext>>,
}

impl CoreState {
    pub fn new(knowledge: KnowledgeContext) -> Self {
        Self {
            knowledge: RwLock::new(Arc::new(knowledge)),
        }
    }

    // ── Read path ───────────────────────────────────────────

    /// Snapshot of the current context. Stays valid across reloads.
    pub fn knowledge(&self) -> Arc<KnowledgeContext> {
        match self.knowledge.read() {
            Ok(guard) => Arc::clone(&*guard),
            // Writers only swap the Arc, never a partial value.
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Route and compose a reply against the current snapshot.
    pub fn process(&self, text: &str) -> ProcessedMessage {
        self.knowledge().process(text)
    }

    // ── Write path ──────────────────────────────────────────

    /// Swap in a new context. In-flight requests keep their snapshot.
    pub fn replace(&self, knowledge: KnowledgeContext) {
        let next = Arc::new(knowledge);
        let mut guard = match self.knowledge.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = next;
    }

    /// Re-read every content file. On failure the current context stays.
    pub fn reload(&self, config: &AppConfig) -> Result<(), CoreError> {
        let next = KnowledgeContext::load(config)?;
        let entries = next.knowledge().len();
        self.replace(next);
        tracing::info!(entries, "Knowledge context reloaded");
        Ok(())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(KnowledgeContext::empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Content load error: {0}")]
    Content(#[from] ProviderError),
}
