use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{instrument, warn};

use crate::{Config, model::AggregatedWeather, session::LookupService};

const FALLBACK_FAILURE: &str = "Failed to fetch weather data";
const TRANSPORT_FAILURE: &str = "An error occurred";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Talks to a running aggregation endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    endpoint: String,
    http: Client,
}

impl HttpLookupClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the lookup endpoint")?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.client.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, city: &str) -> anyhow::Result<Result<AggregatedWeather, String>> {
        let res = self
            .http
            .get(format!("{}/lookup", self.endpoint))
            .query(&[("city", city)])
            .send()
            .await
            .context("Failed to send lookup request")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read lookup response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| FALLBACK_FAILURE.to_string());
            return Ok(Err(message));
        }

        let weather: AggregatedWeather =
            serde_json::from_str(&body).context("Failed to parse lookup response")?;
        Ok(Ok(weather))
    }
}

#[async_trait]
impl LookupService for HttpLookupClient {
    async fn lookup(&self, city: &str) -> Result<AggregatedWeather, String> {
        self.fetch(city).await.unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "lookup request failed");
            Err(TRANSPORT_FAILURE.to_string())
        })
    }
}
