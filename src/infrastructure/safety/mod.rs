//! URL reputation screening.
//!
//! Provides a [`SafetyChecker`] trait with two implementations:
//! - [`SafeBrowsingChecker`] - Google Safe Browsing v4 lookups
//! - [`NullChecker`] - No-op implementation when screening is disabled

mod null_checker;
mod safe_browsing;

pub use null_checker::NullChecker;
pub use safe_browsing::SafeBrowsingChecker;

use async_trait::async_trait;

/// Errors from the reputation service.
///
/// Treated as non-fatal at the request boundary: a failed lookup is reported
/// to the caller as a warning, but the request is not blocked.
#[derive(Debug, thiserror::Error)]
pub enum SafetyError {
    #[error("failed to build safety checker: {0}")]
    Init(String),

    #[error("reputation lookup failed: {0}")]
    Lookup(String),
}

/// Classifies URLs as safe or malicious.
///
/// Implementations are initialized once at startup and injected through
/// application state rather than held as process globals, so tests can swap
/// them freely.
#[async_trait]
pub trait SafetyChecker: Send + Sync {
    /// Returns `Ok(true)` when the URL is not a known threat.
    ///
    /// # Errors
    ///
    /// Returns [`SafetyError::Lookup`] when the reputation service cannot be
    /// reached. Callers decide whether to fail open; the shortener service
    /// proceeds with a warning.
    async fn is_safe(&self, url: &str) -> Result<bool, SafetyError>;

    /// Whether this checker performs real lookups.
    fn enabled(&self) -> bool;
}
