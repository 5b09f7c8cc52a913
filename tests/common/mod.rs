#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use redir::application::ShortenerService;
use redir::infrastructure::MemoryStore;
use redir::infrastructure::safety::NullChecker;
use redir::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// Builds an `AppState` over an in-memory store with screening disabled.
///
/// Returns the store handle alongside the state so tests can seed mappings
/// and advance the simulated clock.
pub fn create_test_state(default_ttl: Duration) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        Arc::new(NullChecker::new()),
        default_ttl,
    ));

    (
        AppState::new(shortener, BASE_URL.to_string()),
        store,
    )
}

/// Seeds a mapping directly in the store.
pub async fn create_test_mapping(store: &MemoryStore, code: &str, url: &str, ttl: Duration) {
    use redir::domain::MappingStore;

    store.put(code, url, ttl).await.unwrap();
}
