//! Rate limiting middleware using a process-wide token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor,
};

/// Creates the shorten-endpoint rate limiter.
///
/// A single bucket is shared across all clients: the limiter protects the
/// store and the reputation service, not individual users. Requests over the
/// threshold are rejected immediately with `429 Too Many Requests`; nothing
/// is queued.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<GlobalKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(GlobalKeyExtractor)
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
