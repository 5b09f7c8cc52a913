use std::sync::Arc;

use crate::application::ShortenerService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Public base URL used when rendering short links, no trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, base_url: String) -> Self {
        Self {
            shortener,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/r/{}", self.base_url, code)
    }
}
