use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Temperature unit selected for display. Upstream data is always Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "C",
            DisplayUnit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DisplayUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(DisplayUnit::Celsius),
            "f" | "fahrenheit" => Ok(DisplayUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!("Unknown unit '{value}'. Supported units: c, f.")),
        }
    }
}

/// Convert an upstream Celsius reading to a whole number in `unit`.
pub fn convert(temp_celsius: f64, unit: DisplayUnit) -> i64 {
    match unit {
        DisplayUnit::Fahrenheit => round_half_up(temp_celsius * 9.0 / 5.0 + 32.0),
        DisplayUnit::Celsius => round_half_up(temp_celsius),
    }
}

/// Rounds .5 towards positive infinity (-2.5 becomes -2), unlike `f64::round`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Wind speed in km/h from m/s.
pub fn wind_kmh(speed_mps: f64) -> i64 {
    round_half_up(speed_mps * 3.6)
}

/// Visibility in km from metres.
pub fn visibility_km(metres: u32) -> i64 {
    round_half_up(f64::from(metres) / 1000.0)
}
