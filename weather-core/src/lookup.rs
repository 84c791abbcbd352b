//! The aggregation step: one current-conditions call and one forecast call
//! folded into a single [`AggregatedWeather`].

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    Config,
    error::{LookupError, ProviderError},
    model::{AggregatedWeather, LookupRequest},
    provider::{WeatherProvider, provider_from_config},
};

/// Stateless lookup handler shared by every request.
#[derive(Debug, Clone)]
pub struct Aggregator {
    provider: Arc<dyn WeatherProvider>,
    api_key: Option<String>,
}

impl Aggregator {
    pub fn new(provider: Arc<dyn WeatherProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Build an aggregator backed by OpenWeather from the loaded config.
    ///
    /// A missing API key is not an error here; every lookup reports it instead.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;
        if !config.is_api_key_configured() {
            warn!("no OpenWeather API key configured; lookups will fail");
        }
        Ok(Self::new(Arc::new(provider), config.api_key().map(str::to_owned)))
    }

    /// Validate a raw `city` parameter into a request.
    ///
    /// The value is forwarded untrimmed; only an absent or empty one is rejected.
    pub fn parse_request(city: Option<&str>) -> Result<LookupRequest, LookupError> {
        match city {
            Some(city) if !city.is_empty() => Ok(LookupRequest {
                city: city.to_owned(),
            }),
            _ => Err(LookupError::BadRequest),
        }
    }

    pub async fn lookup(&self, city: Option<&str>) -> Result<AggregatedWeather, LookupError> {
        let request = Self::parse_request(city)?;
        self.lookup_request(&request).await
    }

    pub async fn lookup_request(
        &self,
        request: &LookupRequest,
    ) -> Result<AggregatedWeather, LookupError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!("rejecting lookup: OpenWeather API key is not configured");
            LookupError::ServerMisconfigured
        })?;

        let city = request.city.as_str();

        // Independent calls; the forecast outcome only matters once current succeeded.
        let (current, forecast) = tokio::join!(
            self.provider.current(city, api_key),
            self.provider.forecast(city, api_key),
        );

        let current = current.map_err(|err| {
            let err = LookupError::from(err);
            if err.is_transient() {
                error!(error = %err, city, "weather API error");
            }
            err
        })?;

        // Only an unreachable or refusing forecast is optional; an unreadable one
        // fails the lookup like an unreadable current body does.
        let forecast = match forecast {
            Ok(list) => Some(list),
            Err(ProviderError::Decode(err)) => {
                error!(error = %err, city, "forecast response could not be decoded");
                return Err(LookupError::Internal(ProviderError::Decode(err)));
            }
            Err(err) => {
                warn!(error = %err, city, "forecast unavailable, continuing without it");
                None
            }
        };

        info!(
            city,
            location = %current.name,
            forecast_slices = forecast.as_ref().map_or(0, Vec::len),
            "lookup complete"
        );

        Ok(AggregatedWeather { current, forecast })
    }
}
