//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::dto::InvalidNumberResponse;
use crate::facts::FactError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The `number` query parameter is missing or not an integer (raw text kept)
    InvalidNumber(String),
    /// The fact source failed and no fallback text is configured
    FactUnavailable(FactError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidNumber(raw) => (
                StatusCode::BAD_REQUEST,
                Json(InvalidNumberResponse {
                    number: raw,
                    error: true,
                }),
            )
                .into_response(),
            AppError::FactUnavailable(e) => (
                StatusCode::BAD_GATEWAY,
                Json(
                    ApiError::new("FACT_UNAVAILABLE", "Fun fact service is unavailable")
                        .with_details(e.to_string()),
                ),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("INTERNAL_ERROR", msg)),
            )
                .into_response(),
        }
    }
}

impl From<FactError> for AppError {
    fn from(err: FactError) -> Self {
        AppError::FactUnavailable(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Classification task failed: {}", err))
    }
}
