//! Application error taxonomy and HTTP mapping.
//!
//! Every error is recovered at the request boundary. The shorten handler
//! renders failures as inline HTML fragments; the redirect path maps errors
//! through [`IntoResponse`] here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::store::StoreError;
use crate::infrastructure::safety::SafetyError;
use crate::utils::url_validator::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The reputation service flagged the URL as a known threat.
    #[error("URL was flagged as unsafe and cannot be shortened")]
    UnsafeUrl,

    #[error("short URL not found")]
    NotFound,

    #[error(transparent)]
    Store(StoreError),

    #[error("safety check failed: {0}")]
    Safety(#[from] SafetyError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::UnsafeUrl => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Short URL not found".to_string()),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage backend unavailable".to_string(),
                )
            }
            AppError::Safety(e) => {
                tracing::error!("Safety check error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Safety check unavailable".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
