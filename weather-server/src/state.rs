//! Application state shared across handlers

use std::sync::Arc;

use weather_core::Aggregator;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Stateless lookup handler; configuration is baked in at startup
    pub aggregator: Arc<Aggregator>,
}
