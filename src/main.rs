use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use physioassist::api;
use physioassist::catalog::Catalog;
use physioassist::config;
use physioassist::triage::TriageEngine;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let engine = Arc::new(TriageEngine::new(Catalog::default()));

    let mut server = match api::server::start(engine, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "failed to start chat API server");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr, "chat API ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    server.shutdown();
}
