//! In-process mapping store for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::store::{MappingStore, StoreError};

struct Entry {
    value: String,
    /// `None` means the entry never expires.
    deadline: Option<Instant>,
}

/// A `MappingStore` backed by two in-process hash maps.
///
/// Mirrors the Redis layout: a forward map (code → URL) and a reverse map
/// (URL → code), written under a single lock so the pair stays consistent.
/// Expiry is evaluated lazily on read against a shiftable clock, which lets
/// tests advance time without sleeping.
#[derive(Default)]
pub struct MemoryStore {
    forward: Mutex<HashMap<String, Entry>>,
    reverse: Mutex<HashMap<String, Entry>>,
    clock_offset: Mutex<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts the store's view of "now" forward by `delta`.
    ///
    /// Only affects expiry checks; entries without a deadline are untouched.
    pub fn advance(&self, delta: Duration) {
        let mut offset = self.clock_offset.lock().unwrap();
        *offset += delta;
    }

    fn now(&self) -> Instant {
        Instant::now() + *self.clock_offset.lock().unwrap()
    }

    fn live_value(&self, map: &Mutex<HashMap<String, Entry>>, key: &str) -> Option<String> {
        let now = self.now();
        let map = map.lock().unwrap();

        map.get(key).and_then(|entry| match entry.deadline {
            Some(deadline) if deadline <= now => None,
            _ => Some(entry.value.clone()),
        })
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), StoreError> {
        let deadline = if ttl.is_zero() {
            None
        } else {
            Some(self.now() + ttl)
        };

        // Both maps are updated while holding the forward lock first, so a
        // concurrent put cannot interleave between the two writes.
        let mut forward = self.forward.lock().unwrap();
        let mut reverse = self.reverse.lock().unwrap();

        forward.insert(
            code.to_string(),
            Entry {
                value: long_url.to_string(),
                deadline,
            },
        );
        reverse.insert(
            long_url.to_string(),
            Entry {
                value: code.to_string(),
                deadline,
            },
        );

        Ok(())
    }

    async fn resolve(&self, code: &str) -> Result<String, StoreError> {
        self.live_value(&self.forward, code)
            .ok_or(StoreError::NotFound)
    }

    async fn find_existing(&self, long_url: &str) -> Result<Option<String>, StoreError> {
        Ok(self.live_value(&self.reverse, long_url))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_resolve_after_put_returns_url() {
        let store = MemoryStore::new();
        store
            .put("abc12345", "https://example.org/page", Duration::ZERO)
            .await
            .unwrap();

        let url = store.resolve("abc12345").await.unwrap();
        assert_eq!(url, "https://example.org/page");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let store = MemoryStore::new();
        let err = store.resolve("missing1").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_find_existing_before_any_put_is_absent() {
        let store = MemoryStore::new();
        let existing = store.find_existing("https://example.org/").await.unwrap();
        assert_eq!(existing, None);
    }

    #[tokio::test]
    async fn test_find_existing_after_put_returns_code() {
        let store = MemoryStore::new();
        store
            .put("abc12345", "https://example.org/", Duration::ZERO)
            .await
            .unwrap();

        let existing = store.find_existing("https://example.org/").await.unwrap();
        assert_eq!(existing, Some("abc12345".to_string()));
    }

    #[tokio::test]
    async fn test_zero_ttl_survives_clock_advance() {
        let store = MemoryStore::new();
        store
            .put("abc12345", "https://example.org/", Duration::ZERO)
            .await
            .unwrap();

        store.advance(Duration::from_secs(365 * 24 * 3600));

        assert!(store.resolve("abc12345").await.is_ok());
        assert_eq!(
            store.find_existing("https://example.org/").await.unwrap(),
            Some("abc12345".to_string())
        );
    }

    #[tokio::test]
    async fn test_positive_ttl_expires_both_directions() {
        let store = MemoryStore::new();
        store
            .put("abc12345", "https://example.org/", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(store.resolve("abc12345").await.is_ok());

        store.advance(Duration::from_secs(61));

        let err = store.resolve("abc12345").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(
            store.find_existing("https://example.org/").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_mapping_resolvable_just_before_expiry() {
        let store = MemoryStore::new();
        store
            .put("abc12345", "https://example.org/", Duration::from_secs(60))
            .await
            .unwrap();

        store.advance(Duration::from_secs(59));

        assert!(store.resolve("abc12345").await.is_ok());
    }

    // Two shorten requests for the same URL can both miss the dedup check
    // and mint different codes. The documented outcome: the reverse entry
    // holds whichever write landed last, and both forward codes stay
    // resolvable.
    #[tokio::test]
    async fn test_concurrent_puts_same_url_last_reverse_write_wins() {
        let store = Arc::new(MemoryStore::new());
        let url = "https://example.org/contended";

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.put("codeAAAA", url, Duration::ZERO).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.put("codeBBBB", url, Duration::ZERO).await })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        assert_eq!(store.resolve("codeAAAA").await.unwrap(), url);
        assert_eq!(store.resolve("codeBBBB").await.unwrap(), url);

        let winner = store.find_existing(url).await.unwrap().unwrap();
        assert!(winner == "codeAAAA" || winner == "codeBBBB");
    }
}
