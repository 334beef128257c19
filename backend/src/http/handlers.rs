//! HTTP handlers for the REST API.
//!
//! The classification itself is delegated to [`crate::algorithms`]; the
//! handlers only parse input, merge in the fun fact and shape the response.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, warn};

use super::dto::{ClassifyQuery, HealthResponse, NumberReport, ServiceInfo};
use super::error::AppError;
use super::state::AppState;
use crate::algorithms;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Service Info
// =============================================================================

/// GET /
///
/// Contact details and the current UTC time.
pub async fn service_info(State(state): State<AppState>) -> HandlerResult<ServiceInfo> {
    Ok(Json(ServiceInfo {
        email: state.info.email.clone(),
        current_datetime: chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
        github_url: state.info.github_url.clone(),
    }))
}

// =============================================================================
// Classification
// =============================================================================

/// GET /api/classify-number?number={n}
///
/// Classify the number and attach a fun fact. The fact lookup runs while the
/// classification is computed on the blocking pool.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HandlerResult<NumberReport> {
    let query = ClassifyQuery::from_pairs(pairs);
    let raw = query.single_number().map_err(AppError::InvalidNumber)?;
    let number = parse_number(raw, state.max_magnitude)?;
    debug!(number, "Classifying number");

    let (classification, fact) = tokio::join!(
        tokio::task::spawn_blocking(move || algorithms::classify(number)),
        state.facts.lookup_fact(number),
    );
    let classification = classification?;

    let fun_fact = match fact {
        Ok(fact) => fact,
        Err(e) => match state.fallback_fact.as_deref() {
            Some(fallback) => {
                warn!(number, error = %e, "Using fallback fun fact");
                fallback.to_string()
            }
            None => return Err(e.into()),
        },
    };

    Ok(Json(NumberReport::new(number, &classification, fun_fact)))
}

/// Parse the textual `number` parameter; surrounding whitespace is ignored and
/// an optional sign is accepted. Values whose magnitude exceeds `max_magnitude`
/// are rejected because the perfect-number check is linear in the input.
pub fn parse_number(raw: &str, max_magnitude: u64) -> Result<i64, AppError> {
    let number = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidNumber(raw.to_string()))?;

    if number.unsigned_abs() > max_magnitude {
        debug!(number, max_magnitude, "Rejecting number above the configured magnitude");
        return Err(AppError::InvalidNumber(raw.to_string()));
    }
    Ok(number)
}
