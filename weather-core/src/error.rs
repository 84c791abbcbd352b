use thiserror::Error;

pub const CITY_REQUIRED: &str = "City parameter is required";
pub const API_KEY_MISSING: &str = "OpenWeather API key is not configured";
pub const CITY_NOT_FOUND: &str =
    "Sorry my future BOSS your City is not found. Please check your spelling and try again.";
pub const UPSTREAM_FAILED: &str = "Weather API request failed";
pub const FETCH_FAILED: &str = "Failed to fetch weather data. Please try again later.";

/// Failure of one upstream provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream reported the city as not found")]
    NotFound,

    #[error("upstream request failed with status {0}")]
    Status(u16),

    #[error("failed to reach upstream: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Typed outcome of a failed lookup.
///
/// `Display` is meant for logs; [`LookupError::user_message`] is the fixed
/// text handed back to callers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{}", CITY_REQUIRED)]
    BadRequest,

    #[error("{}", API_KEY_MISSING)]
    ServerMisconfigured,

    #[error("{}", CITY_NOT_FOUND)]
    NotFound,

    #[error("Weather API request failed (status {0})")]
    Upstream(u16),

    #[error("weather lookup failed: {0}")]
    Internal(#[source] ProviderError),
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::BadRequest => CITY_REQUIRED,
            LookupError::ServerMisconfigured => API_KEY_MISSING,
            LookupError::NotFound => CITY_NOT_FOUND,
            LookupError::Upstream(_) | LookupError::Internal(_) => FETCH_FAILED,
        }
    }

    /// Whether resubmitting the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::Upstream(_) | LookupError::Internal(_))
    }
}

impl From<ProviderError> for LookupError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound => LookupError::NotFound,
            ProviderError::Status(code) => LookupError::Upstream(code),
            other => LookupError::Internal(other),
        }
    }
}
