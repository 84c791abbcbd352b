//! Request handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use weather_core::{AggregatedWeather, LookupError};

use crate::{error::ApiError, state::AppState};

/// Query string of a lookup. `city` stays optional so a missing value
/// reaches the lookup and is reported with the usual error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub city: Option<String>,
}

impl LookupQuery {
    /// Pick the lookup parameters out of raw query pairs.
    ///
    /// A repeated `city` keeps its first value; unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let city = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "city").then_some(value));
        Self { city }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /lookup?city=...`
pub async fn lookup(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AggregatedWeather>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        warn!(error = %rejection, "unreadable lookup query");
        ApiError(LookupError::BadRequest)
    })?;
    let query = LookupQuery::from_pairs(pairs);

    let weather = state.aggregator.lookup(query.city.as_deref()).await?;
    Ok(Json(weather))
}
