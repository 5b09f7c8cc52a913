//! Core mapping entity.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

/// A short code and the long URL it resolves to.
///
/// Mappings are read-only after creation; the store expires them when a TTL
/// was set and keeps them forever otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    /// `None` means the mapping never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Mapping {
    /// Creates a mapping stamped with the current time.
    ///
    /// A zero `ttl` produces a mapping with no expiry.
    pub fn new(code: String, long_url: String, ttl: Duration) -> Self {
        let created_at = Utc::now();
        let expires_at = if ttl.is_zero() {
            None
        } else {
            ChronoDuration::from_std(ttl)
                .ok()
                .map(|d| created_at + d)
        };

        Self {
            code,
            long_url,
            created_at,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ttl_means_no_expiry() {
        let mapping = Mapping::new("abc12345".into(), "https://a.com/".into(), Duration::ZERO);
        assert!(mapping.expires_at.is_none());
    }

    #[test]
    fn test_positive_ttl_sets_expiry_after_creation() {
        let mapping = Mapping::new(
            "abc12345".into(),
            "https://a.com/".into(),
            Duration::from_secs(3600),
        );
        let expires_at = mapping.expires_at.expect("expiry should be set");
        assert!(expires_at > mapping.created_at);
    }
}
