//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Responses
///
/// - 400 for a blank code
/// - 404 for an unknown or expired code
/// - 308 permanent redirect otherwise
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, "Invalid URL").into_response());
    }

    let long_url = state.shortener.resolve(code).await?;
    debug!("Redirecting {} -> {}", code, long_url);

    Ok(Redirect::permanent(&long_url).into_response())
}

/// Catches `GET /r` with no code at all.
pub async fn missing_code_handler() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "Invalid URL")
}
