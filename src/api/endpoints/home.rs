//! Web UI entry page.

use axum::extract::State;
use axum::response::Html;

use crate::api::types::ApiContext;
use crate::config::APP_NAME;

/// `GET /` — `index.html` from the public directory, or a stub page when the
/// UI is not deployed.
pub async fn index(State(ctx): State<ApiContext>) -> Html<String> {
    let path = ctx.config.public_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Web UI not found");
            Html(format!("<h1>{APP_NAME}</h1><p>UI not found.</p>"))
        }
    }
}
