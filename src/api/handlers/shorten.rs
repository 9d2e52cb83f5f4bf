//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::error::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL into a single generated keyword.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "keyword": "example", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or an invalid URL.
/// Returns 500 Internal Server Error if any pipeline stage fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let keyword = state
        .shorten_service
        .shorten(&payload.url)
        .await
        .inspect_err(log_failure)?;

    Ok(Json(ShortenResponse {
        keyword,
        url: payload.url,
    }))
}

fn log_failure(e: &ShortenError) {
    match e {
        ShortenError::InvalidInput(reason) => info!(reason = %reason, "Rejected invalid URL"),
        _ => error!(stage = %e.stage(), error = %e, "Error processing URL"),
    }
}
