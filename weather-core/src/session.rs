//! Client-side session: the state behind the search box and dashboard.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::{fmt::Debug, sync::Arc};
use tracing::debug;

use crate::{
    dashboard::Dashboard,
    lookup::Aggregator,
    model::AggregatedWeather,
    units::DisplayUnit,
};

/// Anything that can answer a city lookup for the client.
///
/// Failures carry only the message to show; the client never inspects
/// error kinds.
#[async_trait]
pub trait LookupService: Send + Sync + Debug {
    async fn lookup(&self, city: &str) -> Result<AggregatedWeather, String>;
}

#[async_trait]
impl LookupService for Aggregator {
    async fn lookup(&self, city: &str) -> Result<AggregatedWeather, String> {
        Aggregator::lookup(self, Some(city))
            .await
            .map_err(|err| err.user_message().to_string())
    }
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    input: String,
    result: Option<Arc<AggregatedWeather>>,
    error: Option<String>,
    loading: bool,
    unit: DisplayUnit,
}

/// The four mutually exclusive render states.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Idle,
    Loading,
    Error(String),
    Populated(Arc<AggregatedWeather>),
}

impl View {
    /// Dashboard for a populated view; `None` otherwise.
    pub fn dashboard(&self, unit: DisplayUnit, today: NaiveDate) -> Option<Dashboard> {
        match self {
            View::Populated(weather) => Some(Dashboard::derive(weather, unit, today)),
            _ => None,
        }
    }
}

/// Session state shared between the input handler and the renderer.
///
/// Overlapping `submit` calls are not sequenced: whichever response resolves
/// last is what the session shows.
#[derive(Debug)]
pub struct Session<S> {
    service: S,
    state: Mutex<SessionState>,
}

impl<S: LookupService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.lock().input = text.into();
    }

    pub fn input(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn set_unit(&self, unit: DisplayUnit) {
        self.state.lock().unit = unit;
    }

    pub fn unit(&self) -> DisplayUnit {
        self.state.lock().unit
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn result(&self) -> Option<Arc<AggregatedWeather>> {
        self.state.lock().result.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    /// Submit whatever is in the input box.
    pub async fn submit_input(&self) {
        let city = self.input();
        self.submit(&city).await;
    }

    /// Look up `city` and store the outcome. Blank input is ignored.
    pub async fn submit(&self, city: &str) {
        if city.trim().is_empty() {
            return;
        }

        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.service.lookup(city).await;

        let mut state = self.state.lock();
        match outcome {
            Ok(weather) => {
                debug!(city, "lookup resolved");
                state.result = Some(Arc::new(weather));
                state.error = None;
            }
            Err(message) => {
                debug!(city, %message, "lookup failed");
                state.error = Some(message);
                state.result = None;
            }
        }
        state.loading = false;
    }

    pub fn view(&self) -> View {
        let state = self.state.lock();
        if state.loading {
            View::Loading
        } else if let Some(message) = &state.error {
            View::Error(message.clone())
        } else if let Some(weather) = &state.result {
            View::Populated(Arc::clone(weather))
        } else {
            View::Idle
        }
    }
}
