use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    error::ProviderError,
    model::{CurrentConditions, ForecastEntry, ForecastResponse},
};

use super::WeatherProvider;

/// OpenWeather 2.5 API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            base_url: normalize_base_url(base_url.into()),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, api_key), fields(base_url = %self.base_url))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        api_key: &str,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            debug!("OpenWeather has no match for city");
            return Err(ProviderError::NotFound);
        }

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<CurrentConditions, ProviderError> {
        self.get_json("weather", city, api_key).await
    }

    async fn forecast(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Vec<ForecastEntry>, ProviderError> {
        let parsed: ForecastResponse = self.get_json("forecast", city, api_key).await?;
        Ok(parsed.list)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
