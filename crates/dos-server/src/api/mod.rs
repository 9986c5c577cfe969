pub mod response;

use crate::config::Config;
use crate::features::{self, FeatureState};
use crate::middleware;
use axum::Router;
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tower::ServiceBuilder;

/// Build the application router with all routes and middleware
pub fn create_router(config: &Config) -> anyhow::Result<Router> {
    let state = FeatureState::from_config(config)?;

    Ok(features::router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::tracing_layer())
            .layer(middleware::cors_layer(&config.cors)),
    ))
}

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let app = create_router(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, upstream = %config.gdc.base_url, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received terminate signal, starting graceful shutdown"),
    }

    tracing::info!("Waiting up to {} seconds for connections to close", timeout_secs.min(5));
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
