//! Redis-backed hash store.

use super::store::{ContentHashStore, HashStoreError, HashStoreResult};
use crate::config::redact_credentials;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis hash store shared by every instance of the service.
///
/// Each page type maps to one Redis set. Lookups and inserts are fail-open:
/// errors are logged and the hash is treated as unseen, so a Redis outage
/// never blocks publishing.
pub struct RedisHashStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisHashStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`HashStoreError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> HashStoreResult<Self> {
        info!("Connecting to Redis at {}", redact_credentials(redis_url));

        let client = Client::open(redis_url).map_err(|e| {
            HashStoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            HashStoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| HashStoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "content_hash:".to_string(),
        })
    }

    /// Constructs the Redis set key of a page type.
    fn build_key(&self, page_type: &str) -> String {
        format!("{}{}", self.key_prefix, page_type)
    }
}

#[async_trait]
impl ContentHashStore for RedisHashStore {
    async fn contains(&self, page_type: &str, hash: &str) -> HashStoreResult<bool> {
        let key = self.build_key(page_type);
        let mut conn = self.client.clone();

        match conn.sismember::<_, _, bool>(&key, hash).await {
            Ok(found) => Ok(found),
            Err(e) => {
                warn!("Redis SISMEMBER error for {}: {}", key, e);
                Ok(false)
            }
        }
    }

    async fn insert(&self, page_type: &str, hash: &str) -> HashStoreResult<bool> {
        let key = self.build_key(page_type);
        let mut conn = self.client.clone();

        match conn.sadd::<_, _, i64>(&key, hash).await {
            Ok(added) => {
                debug!("Hash {} for {}: {}", hash, page_type, if added > 0 { "new" } else { "seen" });
                Ok(added > 0)
            }
            Err(e) => {
                warn!("Redis SADD error for {}: {}", key, e);
                Ok(true)
            }
        }
    }

    async fn clear(&self, page_type: &str) -> HashStoreResult<()> {
        let key = self.build_key(page_type);
        let mut conn = self.client.clone();

        conn.del::<_, i64>(&key)
            .await
            .map_err(|e| HashStoreError::OperationError(format!("Redis DEL failed: {}", e)))?;

        debug!("Cleared hash set {}", key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
