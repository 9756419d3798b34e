//! `POST /api/chat` — JSON chat endpoint used by the web UI.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Facility;
use crate::pipeline::routing::IntentKind;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Accepted for client compatibility; answers are English only.
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    pub payload: ChatPayload,
}

#[derive(Debug, Serialize)]
pub struct ChatPayload {
    pub answer: String,
    pub extra: Option<Value>,
    /// Present (possibly `null`) only on disease answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitals: Option<Option<Vec<Facility>>>,
}

pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let chars = req.message.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }

    let reply = ctx.core.process(&req.message);
    tracing::info!(
        intent = ?reply.kind,
        chars,
        lang = req.lang.as_deref().unwrap_or("en"),
        "Chat message answered"
    );

    let hospitals = match reply.kind {
        IntentKind::KnowledgeBaseAnswer | IntentKind::LegacyDisease => Some(reply.facilities),
        _ => None,
    };

    Ok(Json(ChatResponse {
        kind: reply.kind,
        payload: ChatPayload {
            answer: reply.answer,
            extra: reply.extra,
            hospitals,
        },
    }))
}
