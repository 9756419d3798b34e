//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::core_state::CoreState;

/// Shared context for all routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
    pub config: Arc<AppConfig>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>, config: AppConfig) -> Self {
        Self {
            core,
            config: Arc::new(config),
        }
    }
}
