//! Chat API server lifecycle.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. The triage engine is shared immutable state; the server adds
//! no per-connection or per-session storage.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::chat_router;
use crate::triage::TriageEngine;

/// Handle to a running chat API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("chat API server shutdown signal sent");
        }
    }
}

/// Bind the chat API server and serve it in a background task.
pub async fn start(engine: Arc<TriageEngine>, addr: SocketAddr) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind chat API server: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%addr, "chat API server binding");

    let app = chat_router(engine);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!(error = %e, "chat API server exited with error");
        } else {
            tracing::info!("chat API server stopped");
        }
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}
