//! HTTP server lifecycle: load content → bind → serve until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::router::api_router;
use crate::config::AppConfig;
use crate::core_state::CoreState;
use crate::pipeline::context::KnowledgeContext;
use crate::providers::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Content load failed: {0}")]
    Content(#[from] ProviderError),
    #[error("Failed to bind {0}: {1}")]
    Bind(SocketAddr, std::io::Error),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Load the knowledge context, bind the configured address and serve until
/// Ctrl-C.
pub async fn serve(config: AppConfig) -> Result<(), ServerError> {
    let knowledge = KnowledgeContext::load(&config)?;
    let core = Arc::new(CoreState::new(knowledge));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| ServerError::Bind(config.bind_addr, e))?;

    serve_with_shutdown(listener, core, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    core: Arc<CoreState>,
    config: AppConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    let app = api_router(core, config);

    tracing::info!(%addr, "HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    async fn raw_request(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn serves_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let core = Arc::new(CoreState::new(KnowledgeContext::load_test()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_shutdown(
            listener,
            core,
            AppConfig::default(),
            async move {
                let _ = shutdown_rx.await;
            },
        ));

        let response = raw_request(
            addr,
            "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with("ok"));

        shutdown_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn serve_fails_on_corrupt_content() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("db.json"), "not json").unwrap();
        let config = AppConfig {
            data_dir: tmp.path().to_path_buf(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            ..AppConfig::default()
        };

        let result = serve(config).await;
        assert!(matches!(result, Err(ServerError::Content(_))));
    }
}
