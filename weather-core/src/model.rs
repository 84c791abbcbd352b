use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single city lookup submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub city: String,
}

/// One upstream condition descriptor, e.g. `Clouds` / `broken clouds` / `04d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Metres per second with `units=metric`.
    pub speed: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current conditions as returned by the upstream `/weather` call.
///
/// Fields the dashboard does not read are kept in `extra` so the payload
/// can be handed to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: Sys,
    pub main: CurrentMain,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Metres. Not every station reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CurrentConditions {
    /// The leading condition descriptor; the only one shown downstream.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One 3-hour forecast slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix seconds.
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<Condition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ForecastEntry {
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Envelope of the upstream `/forecast` call. Only `list` is surfaced.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// Combined payload of one lookup.
///
/// `forecast` is `None` when the forecast call failed; the lookup itself
/// still succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWeather {
    pub current: CurrentConditions,
    pub forecast: Option<Vec<ForecastEntry>>,
}
