use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::ProviderError,
    model::{CurrentConditions, ForecastEntry},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// Upstream source of current conditions and 3-hour forecast slices.
///
/// The credential is passed per call so the aggregation layer can decide
/// whether one is configured before anything goes over the wire.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str, api_key: &str)
    -> Result<CurrentConditions, ProviderError>;

    async fn forecast(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Vec<ForecastEntry>, ProviderError>;
}

/// Construct the OpenWeather provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    OpenWeatherProvider::with_timeout(config.upstream_url.clone(), config.timeout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_uses_upstream_url() {
        let mut cfg = Config::default();
        cfg.upstream_url = "http://localhost:9999/data/2.5/".into();

        let provider = provider_from_config(&cfg).expect("provider must build");
        assert_eq!(provider.base_url(), "http://localhost:9999/data/2.5");
    }

    #[test]
    fn provider_builds_without_api_key() {
        let cfg = Config::default();
        assert!(!cfg.is_api_key_configured());
        assert!(provider_from_config(&cfg).is_ok());
    }
}
