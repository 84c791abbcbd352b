//! HTTP surface of the weather lookup app.
//!
//! Exposes the aggregation endpoint (`/lookup`, plus the `/api/weather`
//! alias used by the browser client) and a health check.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use anyhow::Context;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use weather_core::{Aggregator, Config};

pub use error::ApiError;
pub use state::AppState;

/// Build the full application: routes plus tracing and CORS layers.
pub fn app(state: AppState) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind `config.server.bind` and serve until Ctrl-C.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let aggregator = Aggregator::from_config(config)?;
    let state = AppState {
        aggregator: Arc::new(aggregator),
    };

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    info!(
        addr = %config.server.bind,
        upstream = %config.upstream_url,
        "weather server listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("weather server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
