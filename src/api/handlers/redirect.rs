//! Handler for keyword redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, error};

use crate::domain::error::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a keyword to its stored URL.
///
/// # Endpoint
///
/// `GET /{keyword}`
///
/// # Response
///
/// 301 Moved Permanently with the stored URL in `Location`. Keywords are
/// immutable, so the redirect is safe to cache.
///
/// # Errors
///
/// Returns 404 Not Found if the keyword is unknown.
pub async fn redirect_handler(
    Path(keyword): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state
        .shorten_service
        .resolve(&keyword)
        .await
        .inspect_err(|e| match e {
            ShortenError::NotFound(_) => debug!(keyword = %keyword, "Unknown keyword"),
            _ => error!(keyword = %keyword, error = %e, "Keyword lookup failed"),
        })?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, target_url)],
    ))
}
