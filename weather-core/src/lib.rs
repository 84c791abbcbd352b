//! Core library for the weather lookup app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and the aggregation step behind `/lookup`
//! - Shared domain models (upstream-shaped records, aggregated payload)
//! - Client-side logic: unit conversion, daily bucketing, dashboard values,
//!   and the session state machine
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod session;
pub mod units;

pub use client::HttpLookupClient;
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{LookupError, ProviderError};
pub use forecast::derive_daily_forecast;
pub use lookup::Aggregator;
pub use model::{AggregatedWeather, CurrentConditions, ForecastEntry, LookupRequest};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use session::{LookupService, Session, View};
pub use units::{DisplayUnit, convert};
