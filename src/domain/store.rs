//! Store trait for bidirectional short-code mappings.

use async_trait::async_trait;
use std::time::Duration;

/// Errors surfaced by store implementations.
///
/// Store failures are never retried; they are logged and propagated to the
/// request boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("shortened URL not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for short-code mappings.
///
/// Implementations keep a forward entry (code → long URL) and a reverse entry
/// (long URL → code) with identical lifecycle: both are written atomically and
/// both expire after the same TTL. A zero TTL means the mapping never expires.
///
/// # Implementations
///
/// - [`crate::infrastructure::RedisStore`] - Redis-backed production store
/// - [`crate::infrastructure::MemoryStore`] - In-process store for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Writes the forward and reverse mappings in a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backing service rejects the
    /// write. Callers must not assume partial state on failure: either both
    /// entries exist or neither does.
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown or expired codes and
    /// [`StoreError::Unavailable`] on transport failures.
    async fn resolve(&self, code: &str) -> Result<String, StoreError>;

    /// Looks up the existing code for a long URL, if one is active.
    ///
    /// Used to deduplicate shorten requests: an already-shortened URL returns
    /// its current code instead of minting a new one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on transport failures. Absence is
    /// not an error.
    async fn find_existing(&self, long_url: &str) -> Result<Option<String>, StoreError>;

    /// Reports whether the backing service answers a liveness probe.
    async fn health_check(&self) -> bool;
}
