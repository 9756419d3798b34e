pub mod api; // HTTP transport (chat JSON, WhatsApp webhook)
pub mod config;
pub mod core_state; // Transport-agnostic state
pub mod facilities; // Tag-scored facility suggestions
pub mod format;
pub mod models;
pub mod pipeline; // Understanding + routing
pub mod providers; // Content stores loaded from the data directory

use tracing_subscriber::EnvFilter;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        public_dir = %config.public_dir.display(),
        bind = %config.bind_addr,
        "Configuration loaded"
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(api::serve(config)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
