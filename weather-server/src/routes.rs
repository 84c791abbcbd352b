//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup", get(handlers::lookup))
        // Path used by the browser client
        .route("/api/weather", get(handlers::lookup))
        .with_state(state)
}
