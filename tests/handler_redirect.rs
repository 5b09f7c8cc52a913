mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;

use redir::handlers::{missing_code_handler, redirect_handler};
use redir::infrastructure::MemoryStore;

fn redirect_app() -> (TestServer, std::sync::Arc<MemoryStore>) {
    let (state, store) = common::create_test_state(Duration::ZERO);
    let app = Router::new()
        .route("/r", get(missing_code_handler))
        .route("/r/{code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_redirect_known_code_is_permanent() {
    let (server, store) = redirect_app();
    common::create_test_mapping(&store, "abc12345", "https://example.org/page", Duration::ZERO)
        .await;

    let response = server.get("/r/abc12345").await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.org/page"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code_is_404() {
    let (server, _store) = redirect_app();

    let response = server.get("/r/missing1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Short URL not found"));
}

#[tokio::test]
async fn test_redirect_without_code_is_400() {
    let (server, _store) = redirect_app();

    let response = server.get("/r").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redirect_blank_code_is_400() {
    let (server, _store) = redirect_app();

    let response = server.get("/r/%20").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redirect_expired_code_is_404() {
    let (server, store) = redirect_app();
    common::create_test_mapping(
        &store,
        "abc12345",
        "https://example.org/page",
        Duration::from_secs(60),
    )
    .await;

    store.advance(Duration::from_secs(61));

    let response = server.get("/r/abc12345").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_redirect_permanent_mapping_survives_clock_advance() {
    let (server, store) = redirect_app();
    common::create_test_mapping(&store, "abc12345", "https://example.org/page", Duration::ZERO)
        .await;

    store.advance(Duration::from_secs(10 * 365 * 24 * 3600));

    let response = server.get("/r/abc12345").await;
    response.assert_status(StatusCode::PERMANENT_REDIRECT);
}
