//! Shortening and resolution service.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::mapping::Mapping;
use crate::domain::store::{MappingStore, StoreError};
use crate::error::AppError;
use crate::infrastructure::safety::SafetyChecker;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Result of a shorten request.
#[derive(Debug)]
pub struct ShortenOutcome {
    pub mapping: Mapping,
    /// True when the URL was already shortened and the existing code was
    /// returned instead of a new one.
    pub deduplicated: bool,
    /// Set when the reputation lookup failed and the request proceeded
    /// unchecked.
    pub safety_warning: Option<String>,
}

/// Service coordinating validation, safety screening, deduplication, and
/// storage.
///
/// The dedup lookup and the write are separate round trips, so two concurrent
/// requests for the same URL can both miss the check and each mint a code.
/// The store's atomic put keeps each pair consistent; the reverse entry ends
/// up holding whichever write landed last.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    safety: Arc<dyn SafetyChecker>,
    default_ttl: Duration,
}

impl ShortenerService {
    /// Creates the service.
    ///
    /// `default_ttl` applies to every new mapping; `Duration::ZERO` means
    /// mappings never expire.
    pub fn new(
        store: Arc<dyn MappingStore>,
        safety: Arc<dyn SafetyChecker>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            store,
            safety,
            default_ttl,
        }
    }

    /// Shortens a URL, returning the existing mapping when one is active.
    ///
    /// # Flow
    ///
    /// 1. Validate the raw URL (first failing check wins)
    /// 2. Screen it against the reputation service (fail-open on lookup
    ///    errors, with a warning in the outcome)
    /// 3. Return the existing code if the URL was already shortened
    /// 4. Otherwise generate a fresh code and write both mappings atomically
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for rejected input,
    /// [`AppError::UnsafeUrl`] for flagged URLs, and [`AppError::Store`] when
    /// the store is unreachable.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenOutcome, AppError> {
        validate_url(raw_url)?;

        let safety_warning = match self.safety.is_safe(raw_url).await {
            Ok(true) => None,
            Ok(false) => return Err(AppError::UnsafeUrl),
            Err(e) => {
                warn!("Safety check unavailable, proceeding unchecked: {e}");
                Some("Safety check unavailable; the URL was not screened.".to_string())
            }
        };

        if let Some(code) = self.store.find_existing(raw_url).await? {
            return Ok(ShortenOutcome {
                mapping: Mapping::new(code, raw_url.to_string(), self.default_ttl),
                deduplicated: true,
                safety_warning,
            });
        }

        let code = self.generate_unique_code().await?;
        self.store.put(&code, raw_url, self.default_ttl).await?;

        Ok(ShortenOutcome {
            mapping: Mapping::new(code, raw_url.to_string(), self.default_ttl),
            deduplicated: false,
            safety_warning,
        })
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired codes.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        Ok(self.store.resolve(code).await?)
    }

    /// Reports store liveness for the health endpoint.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }

    /// Whether real safety screening is active.
    pub fn safety_enabled(&self) -> bool {
        self.safety.enabled()
    }

    /// Generates a code not currently present in the store.
    ///
    /// Random 8-character codes make collisions rare; the loop retries a few
    /// times before giving up rather than overwriting a live mapping.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            match self.store.resolve(&code).await {
                Err(StoreError::NotFound) => return Ok(code),
                Ok(_) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::Store(StoreError::Unavailable(
            "could not generate a unique code".to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockMappingStore;
    use crate::infrastructure::MemoryStore;
    use crate::infrastructure::safety::{NullChecker, SafetyError};
    use async_trait::async_trait;

    struct Flagging;

    #[async_trait]
    impl SafetyChecker for Flagging {
        async fn is_safe(&self, _url: &str) -> Result<bool, SafetyError> {
            Ok(false)
        }

        fn enabled(&self) -> bool {
            true
        }
    }

    struct Unreachable;

    #[async_trait]
    impl SafetyChecker for Unreachable {
        async fn is_safe(&self, _url: &str) -> Result<bool, SafetyError> {
            Err(SafetyError::Lookup("connection refused".into()))
        }

        fn enabled(&self) -> bool {
            true
        }
    }

    fn service_with_memory_store() -> ShortenerService {
        ShortenerService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(NullChecker::new()),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_shorten_then_resolve_round_trip() {
        let service = service_with_memory_store();

        let outcome = service.shorten("https://example.org/page").await.unwrap();
        assert!(!outcome.deduplicated);
        assert_eq!(outcome.mapping.code.len(), 8);

        let url = service.resolve(&outcome.mapping.code).await.unwrap();
        assert_eq!(url, "https://example.org/page");
    }

    #[tokio::test]
    async fn test_shorten_same_url_twice_reuses_code() {
        let service = service_with_memory_store();

        let first = service.shorten("https://example.org/page").await.unwrap();
        let second = service.shorten("https://example.org/page").await.unwrap();

        assert!(second.deduplicated);
        assert_eq!(first.mapping.code, second.mapping.code);
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_store() {
        let mut store = MockMappingStore::new();
        store.expect_find_existing().never();
        store.expect_put().never();

        let service = ShortenerService::new(
            Arc::new(store),
            Arc::new(NullChecker::new()),
            Duration::ZERO,
        );

        let err = service.shorten("ftp://example.com").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_flagged_url_is_rejected() {
        let service = ShortenerService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Flagging),
            Duration::ZERO,
        );

        let err = service.shorten("https://phish.example.org/").await.unwrap_err();
        assert!(matches!(err, AppError::UnsafeUrl));
    }

    #[tokio::test]
    async fn test_safety_outage_fails_open_with_warning() {
        let service = ShortenerService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Unreachable),
            Duration::ZERO,
        );

        let outcome = service.shorten("https://example.org/").await.unwrap();
        assert!(outcome.safety_warning.is_some());
        assert!(service.resolve(&outcome.mapping.code).await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let service = service_with_memory_store();

        let err = service.resolve("nope1234").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_as_store_error() {
        let mut store = MockMappingStore::new();
        store
            .expect_find_existing()
            .returning(|_| Err(StoreError::Unavailable("redis down".into())));

        let service = ShortenerService::new(
            Arc::new(store),
            Arc::new(NullChecker::new()),
            Duration::ZERO,
        );

        let err = service.shorten("https://example.org/").await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
