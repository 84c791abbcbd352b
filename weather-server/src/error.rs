//! API error handling
//!
//! Maps lookup failures onto status codes and a `{ "error": ... }` body.
//! The body only ever carries the fixed user-facing message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use weather_core::LookupError;

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error type
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LookupError::BadRequest => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::ServerMisconfigured
            | LookupError::Upstream(_)
            | LookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.user_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
