//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honored when present.
//!
//! ## Variables
//!
//! - `BASE_URL` - Public base URL rendered into short links
//!   (default: `http://localhost:8080`)
//! - `PORT` - Listen port (default: `8080`)
//! - `REDIS_URL` / `REDIS_HOST` + `REDIS_PASSWORD` - Store connection;
//!   if `REDIS_URL` is not set, the URL is built from components
//! - `SAFE_BROWSING_API_KEY` - Enables reputation screening when set
//! - `DEFAULT_TTL_HOURS` - Mapping lifetime in hours; `0` means mappings
//!   never expire (default: `0`)
//! - `RATE_LIMIT_PER_SECOND` - Token bucket refill rate (default: `2`)
//! - `RATE_LIMIT_BURST` - Token bucket capacity (default: `100`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub redis_url: String,
    /// `None` disables safety screening.
    pub safe_browsing_api_key: Option<String>,
    /// Zero means mappings never expire.
    pub default_ttl: Duration,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or any numeric variable is present but not
    /// parseable.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number, got '{}'", v))?,
            Err(_) => 8080,
        };

        let redis_url = Self::load_redis_url();

        let safe_browsing_api_key = env::var("SAFE_BROWSING_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let default_ttl_hours: u64 = env::var("DEFAULT_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            port,
            redis_url,
            safe_browsing_api_key,
            default_ttl: Self::ttl_from_hours(default_ttl_hours)?,
            rate_limit_per_second,
            rate_limit_burst,
            log_level,
            log_format,
        })
    }

    /// Loads the Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST` and `REDIS_PASSWORD`
    fn load_redis_url() -> String {
        if let Ok(url) = env::var("REDIS_URL") {
            return url;
        }

        let host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost:6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty());

        match password {
            Some(pwd) => format!("redis://:{}@{}/0", pwd, host),
            None => format!("redis://{}/0", host),
        }
    }

    /// Converts a TTL in hours to a `Duration`.
    ///
    /// The multiplication is checked so an absurd `DEFAULT_TTL_HOURS` fails
    /// loudly here instead of wrapping before `validate()` sees it.
    fn ttl_from_hours(hours: u64) -> Result<Duration> {
        let seconds = hours
            .checked_mul(3600)
            .ok_or_else(|| anyhow::anyhow!("DEFAULT_TTL_HOURS is too large, got {}", hours))?;

        Ok(Duration::from_secs(seconds))
    }

    /// The socket address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rate_limit_per_second` or `rate_limit_burst` is zero
    /// - `default_ttl` exceeds ten years
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be at least 1");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        const MAX_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 3600);
        if self.default_ttl > MAX_TTL {
            anyhow::bail!(
                "DEFAULT_TTL_HOURS is too large (max: {} hours)",
                MAX_TTL.as_secs() / 3600
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }
}
