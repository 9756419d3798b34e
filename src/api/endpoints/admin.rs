//! `POST /api/reload` — re-read the content files without restarting.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: &'static str,
    pub entries: usize,
}

pub async fn reload(State(ctx): State<ApiContext>) -> Result<Json<ReloadResponse>, ApiError> {
    let core = ctx.core.clone();
    let config = ctx.config.clone();

    // Loading parses JSON files; keep it off the async workers.
    tokio::task::spawn_blocking(move || core.reload(&config))
        .await
        .map_err(|e| ApiError::Internal(format!("Reload task failed: {e}")))??;

    Ok(Json(ReloadResponse {
        status: "reloaded",
        entries: ctx.core.knowledge().knowledge().len(),
    }))
}
