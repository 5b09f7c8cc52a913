//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::state::AppState;

/// Reports service health including a store liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns 200 when the store answers its PING, 503 otherwise. The safety
/// field only reports whether screening is configured; the reputation
/// service is not probed.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store_healthy = state.shortener.store_healthy().await;

    let status = if store_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if store_healthy { "ok" } else { "degraded" },
        "store": store_healthy,
        "safety_screening": state.shortener.safety_enabled(),
    });

    (status, Json(body))
}
