//! HTTP server initialization and runtime setup.
//!
//! Handles the Redis connection, safety checker setup, and Axum server
//! lifecycle.

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::ShortenerService;
use crate::config::Config;
use crate::domain::store::MappingStore;
use crate::infrastructure::RedisStore;
use crate::infrastructure::safety::{NullChecker, SafeBrowsingChecker, SafetyChecker};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis mapping store (startup aborts if unreachable)
/// - Safety checker (degrades to [`NullChecker`] when no key is configured
///   or initialization fails)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the Redis connection, server bind, or server runtime
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn MappingStore> = Arc::new(
        RedisStore::connect(&config.redis_url)
            .await
            .map_err(|e| anyhow::anyhow!("store connection failed: {e}"))?,
    );

    let safety: Arc<dyn SafetyChecker> = match &config.safe_browsing_api_key {
        Some(key) => match SafeBrowsingChecker::new(key.clone()) {
            Ok(checker) => {
                tracing::info!("Safety screening enabled (Safe Browsing)");
                Arc::new(checker)
            }
            Err(e) => {
                tracing::warn!("Failed to initialize Safe Browsing: {}. Screening disabled.", e);
                Arc::new(NullChecker::new())
            }
        },
        None => {
            tracing::info!("Safety screening disabled (no API key)");
            Arc::new(NullChecker::new())
        }
    };

    let shortener = Arc::new(ShortenerService::new(store, safety, config.default_ttl));
    let state = AppState::new(shortener, config.base_url.clone());

    let app = app_router(state, config.rate_limit_per_second, config.rate_limit_burst);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
