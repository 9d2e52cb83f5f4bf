//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /shorten`    - Shorten a URL into a keyword
/// - `GET  /{keyword}`  - Redirect to the stored URL
///
/// Any other method on these paths yields 405 Method Not Allowed. The bare
/// root `/` matches neither route, since keywords are never empty, so every
/// method on it falls through to 404.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{keyword}", get(redirect_handler))
}
