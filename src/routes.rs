//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `POST /shorten`   - Shorten a URL (rate limited, process-wide bucket)
//! - `GET  /r/{code}`  - Short link redirect
//! - `GET  /r`         - 400, missing code
//! - `GET  /health`    - Health check including a store PING
//!
//! # Middleware
//!
//! - **Tracing** - request/response spans on every route
//! - **Rate limiting** - global token bucket on `/shorten` only; redirects
//!   stay cheap and unthrottled
//! - **Path normalization** - trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::handlers::{
    health_handler, home_handler, missing_code_handler, redirect_handler, shorten_handler,
};
use crate::middleware::{rate_limit, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `rate_per_second` and `burst` size the shared token bucket guarding the
/// shorten endpoint.
pub fn app_router(state: AppState, rate_per_second: u64, burst: u32) -> NormalizePath<Router> {
    let shorten = Router::new()
        .route("/shorten", post(shorten_handler))
        .layer(rate_limit::layer(rate_per_second, burst));

    let router = Router::new()
        .route("/", get(home_handler))
        .route("/r", get(missing_code_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(shorten)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
