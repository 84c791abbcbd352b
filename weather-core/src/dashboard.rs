//! Display values derived from one [`AggregatedWeather`].
//!
//! Everything here is pure: the same payload, unit and date always produce
//! the same dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    forecast::derive_daily_forecast,
    model::{AggregatedWeather, Condition, ForecastEntry},
    units::{DisplayUnit, convert, visibility_km, wind_kmh},
};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

pub const WELCOME_TITLE: &str = "Welcome to Warp Weather App";
pub const WELCOME_SUBTITLE: &str = "Search for a city to get started";

/// Large icon used on the current-conditions card.
pub fn icon_url_large(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@2x.png")
}

/// Small icon used on forecast cards.
pub fn icon_url_small(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}.png")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentCard {
    pub city: String,
    pub country: String,
    pub date: String,
    pub temperature: i64,
    pub condition: String,
    pub description: String,
    pub icon_url: String,
    pub unit: DisplayUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub date: String,
    pub condition: String,
    pub icon_url: String,
    pub high: i64,
    pub low: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub current: CurrentCard,
    pub forecast: Vec<ForecastCard>,
    pub highlights: Vec<Highlight>,
}

impl Dashboard {
    pub fn derive(weather: &AggregatedWeather, unit: DisplayUnit, today: NaiveDate) -> Self {
        let current = &weather.current;
        let (condition, description, icon) = condition_parts(current.primary_condition());

        let card = CurrentCard {
            city: current.name.clone(),
            country: current.sys.country.clone().unwrap_or_default(),
            date: today.format("%A, %B %-d, %Y").to_string(),
            temperature: convert(current.main.temp, unit),
            condition,
            description,
            icon_url: icon_url_large(&icon),
            unit,
        };

        let forecast: Vec<ForecastCard> = weather
            .forecast
            .as_deref()
            .map(|entries| {
                derive_daily_forecast(entries)
                    .into_iter()
                    .map(|entry| forecast_card(entry, unit))
                    .collect()
            })
            .unwrap_or_default();

        let highlights = vec![
            Highlight {
                title: "Temperature Variation",
                value: format!(
                    "{}° / {}°",
                    convert(current.main.temp_max, unit),
                    convert(current.main.temp_min, unit)
                ),
                subtitle: format!("Feels like {}°", convert(current.main.feels_like, unit)),
            },
            Highlight {
                title: "Wind Speed",
                value: format!("{} km/h", wind_kmh(current.wind.speed)),
                subtitle: "Wind speed".to_string(),
            },
            Highlight {
                title: "Humidity",
                value: format!("{}%", current.main.humidity),
                subtitle: "Humidity level".to_string(),
            },
            Highlight {
                title: "Visibility",
                value: current
                    .visibility
                    .map(|metres| format!("{} km", visibility_km(metres)))
                    .unwrap_or_else(|| "N/A".to_string()),
                subtitle: "Visibility range".to_string(),
            },
        ];

        Self {
            current: card,
            forecast,
            highlights,
        }
    }
}

fn forecast_card(entry: &ForecastEntry, unit: DisplayUnit) -> ForecastCard {
    let (condition, _, icon) = condition_parts(entry.primary_condition());
    let date = DateTime::<Utc>::from_timestamp(entry.dt, 0)
        .map(|dt| dt.format("%-d %a").to_string())
        .unwrap_or_default();

    ForecastCard {
        date,
        condition,
        icon_url: icon_url_small(&icon),
        high: convert(entry.main.temp_max, unit),
        low: convert(entry.main.temp_min, unit),
    }
}

fn condition_parts(condition: Option<&Condition>) -> (String, String, String) {
    condition
        .map(|c| (c.main.clone(), c.description.clone(), c.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string(), String::new()))
}
