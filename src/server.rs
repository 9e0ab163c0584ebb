use anyhow::{Context, Result};
use axum::Router;
use tokio::signal;
use tracing::info;

use crate::config::Config;
use crate::routes;

/// Bind the listener and serve until SIGINT or SIGTERM.
pub async fn serve(app: Router, config: &Config) -> Result<()> {
    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Server listening on {}", listener.local_addr()?);
    info!("  - GET  {}  (logger from factory)", routes::FACTORY);
    info!("  - GET  {}  (logger derived from module and span)", routes::DERIVED);
    info!("  - GET  {}  (health check)", routes::HEALTH);
    info!("  - GET  {}  (OpenAPI document)", routes::OPENAPI);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated abnormally")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
