//! Handler for the shorten endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Form payload submitted by the landing page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
}

/// Fragment rendered on a successful shorten.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/short_link.html")]
pub struct ShortLinkFragment {
    pub short_url: String,
    pub warning: Option<String>,
}

/// Fragment rendered for a rejected request.
///
/// Served with status 200: the fragment replaces the form's result area
/// inline, and the failure category is in the message text.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/shorten_error.html")]
pub struct ShortenErrorFragment {
    pub message: String,
}

/// Shortens the submitted URL and returns an HTML fragment.
///
/// # Endpoint
///
/// `POST /shorten` with form field `url`
///
/// # Responses
///
/// - Success: fragment with the short link (existing code when the URL was
///   already shortened)
/// - Validation failure, flagged URL, or store failure: error fragment with
///   the specific reason, status 200
/// - Rate limit: 429, produced by the governor layer before this handler
///   runs
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(payload): Form<ShortenForm>,
) -> Response {
    match state.shortener.shorten(payload.url.trim()).await {
        Ok(outcome) => {
            info!(
                code = %outcome.mapping.code,
                deduplicated = outcome.deduplicated,
                "Shortened URL"
            );

            ShortLinkFragment {
                short_url: state.short_url(&outcome.mapping.code),
                warning: outcome.safety_warning,
            }
            .into_response()
        }
        Err(err @ (AppError::Validation(_) | AppError::UnsafeUrl)) => ShortenErrorFragment {
            message: err.to_string(),
        }
        .into_response(),
        // Backend detail stays in the log; the fragment gets a generic line.
        Err(AppError::Store(e)) => {
            error!("Store error while shortening: {e}");
            ShortenErrorFragment {
                message: "Storage backend unavailable".to_string(),
            }
            .into_response()
        }
        Err(other) => other.into_response(),
    }
}
