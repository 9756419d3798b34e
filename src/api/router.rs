//! HTTP router.
//!
//! Routes:
//! - `GET /` web UI, `/public/*` static assets
//! - `GET /health`
//! - `POST /api/chat`, `POST /api/reload`
//! - `POST /whatsapp`

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config::AppConfig;
use crate::core_state::CoreState;

pub fn api_router(core: Arc<CoreState>, config: AppConfig) -> Router {
    build_router(ApiContext::new(core, config))
}

fn build_router(ctx: ApiContext) -> Router {
    let public = ServeDir::new(&ctx.config.public_dir);

    let api = Router::new()
        .route("/chat", post(endpoints::chat::send))
        .route("/reload", post(endpoints::admin::reload));

    Router::new()
        .route("/", get(endpoints::home::index))
        .route("/health", get(endpoints::health::check))
        .route("/whatsapp", post(endpoints::whatsapp::reply))
        .nest("/api", api)
        .nest_service("/public", public)
        .with_state(ctx)
}
