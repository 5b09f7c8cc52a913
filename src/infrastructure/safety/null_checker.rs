//! No-op safety checker used when screening is disabled.

use async_trait::async_trait;
use tracing::debug;

use super::{SafetyChecker, SafetyError};

/// A checker that reports every URL as safe.
///
/// Used when no Safe Browsing API key is configured, or as the fallback when
/// the real checker fails to initialize. Screening is opt-in; its absence
/// must never block startup.
pub struct NullChecker;

impl NullChecker {
    pub fn new() -> Self {
        debug!("Using NullChecker (safety screening disabled)");
        Self
    }
}

impl Default for NullChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SafetyChecker for NullChecker {
    async fn is_safe(&self, _url: &str) -> Result<bool, SafetyError> {
        Ok(true)
    }

    fn enabled(&self) -> bool {
        false
    }
}
