//! Redis-backed mapping store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::store::{MappingStore, StoreError};

/// Key prefix for the forward mapping (code → long URL).
const SHORT_KEY_PREFIX: &str = "short:";

/// Key prefix for the reverse mapping (long URL → code).
const LONG_KEY_PREFIX: &str = "long:";

/// Production store backed by Redis.
///
/// Uses `ConnectionManager` for connection reuse. The forward and reverse
/// entries for a mapping are written inside one MULTI/EXEC pipeline so that a
/// failure cannot leave a code resolvable without its dedup entry, or the
/// other way round.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails. The caller is
    /// expected to abort startup on this error; the service cannot run
    /// without its store.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }

    fn short_key(code: &str) -> String {
        format!("{}{}", SHORT_KEY_PREFIX, code)
    }

    fn long_key(long_url: &str) -> String {
        format!("{}{}", LONG_KEY_PREFIX, long_url)
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), StoreError> {
        let short_key = Self::short_key(code);
        let long_key = Self::long_key(long_url);
        let mut conn = self.client.clone();

        let mut pipe = redis::pipe();
        pipe.atomic();

        if ttl.is_zero() {
            pipe.set(&short_key, long_url).ignore();
            pipe.set(&long_key, code).ignore();
        } else {
            let ttl_seconds = ttl.as_secs().max(1);
            pipe.set_ex(&short_key, long_url, ttl_seconds).ignore();
            pipe.set_ex(&long_key, code, ttl_seconds).ignore();
        }

        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis MULTI/EXEC failed: {}", e)))?;

        debug!(
            "Stored mapping {} -> {} (TTL: {:?})",
            code,
            long_url,
            if ttl.is_zero() { None } else { Some(ttl) }
        );

        Ok(())
    }

    async fn resolve(&self, code: &str) -> Result<String, StoreError> {
        let key = Self::short_key(code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(long_url)) => {
                debug!("Resolved {} -> {}", code, long_url);
                Ok(long_url)
            }
            Ok(None) => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Unavailable(format!(
                "Redis GET failed for {}: {}",
                code, e
            ))),
        }
    }

    async fn find_existing(&self, long_url: &str) -> Result<Option<String>, StoreError> {
        let key = Self::long_key(long_url);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&key).await.map_err(|e| {
            StoreError::Unavailable(format!("Redis reverse lookup failed: {}", e))
        })
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
