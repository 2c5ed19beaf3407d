use std::sync::Arc;
use std::time::Duration;

use redis::AsyncCommands;

use crate::cache::connection::RedisDatabase;
use crate::errors::{AdapterError, AdapterResult};

/// Cache repository trait - namespaced pass-through key-value operations
///
/// Values are opaque serialized strings; expiry is handled entirely by Redis.
#[async_trait::async_trait]
pub trait CacheRepository: Send + Sync {
    /// Store a value under the namespaced key with a TTL
    ///
    /// A zero TTL stores the value without expiration.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AdapterResult<()>;

    /// Fetch a value; `None` when the key is absent or expired
    async fn get(&self, key: &str) -> AdapterResult<Option<String>>;

    /// Whether the key currently exists
    async fn exists(&self, key: &str) -> AdapterResult<bool>;

    /// Remove the key; removing an absent key is not an error
    async fn delete(&self, key: &str) -> AdapterResult<()>;
}

/// Redis cache repository
pub struct RedisCacheRepository {
    db: Arc<RedisDatabase>,
    namespace: String,
}

impl RedisCacheRepository {
    pub fn new(db: Arc<RedisDatabase>, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }

    fn namespaced_key(&self, key: &str) -> String {
        namespaced_key(&self.namespace, key)
    }
}

/// Prefix a key with a namespace; an empty namespace leaves the key untouched
fn namespaced_key(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", namespace, key)
    }
}

#[async_trait::async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AdapterResult<()> {
        let full_key = self.namespaced_key(key);
        let mut conn = self.db.manager()?;

        if ttl.is_zero() {
            let _: () = conn
                .set(&full_key, value)
                .await
                .map_err(|e| AdapterError::Cache(format!("SET {} failed: {}", full_key, e)))?;
        } else {
            let _: () = conn
                .set_ex(&full_key, value, ttl.as_secs().max(1))
                .await
                .map_err(|e| AdapterError::Cache(format!("SETEX {} failed: {}", full_key, e)))?;
        }

        tracing::debug!(key = %full_key, ttl_secs = ttl.as_secs(), "cache set");
        Ok(())
    }

    async fn get(&self, key: &str) -> AdapterResult<Option<String>> {
        let full_key = self.namespaced_key(key);
        let mut conn = self.db.manager()?;

        let value: Option<String> = conn
            .get(&full_key)
            .await
            .map_err(|e| AdapterError::Cache(format!("GET {} failed: {}", full_key, e)))?;
        Ok(value)
    }

    async fn exists(&self, key: &str) -> AdapterResult<bool> {
        let full_key = self.namespaced_key(key);
        let mut conn = self.db.manager()?;

        let exists: bool = conn
            .exists(&full_key)
            .await
            .map_err(|e| AdapterError::Cache(format!("EXISTS {} failed: {}", full_key, e)))?;
        Ok(exists)
    }

    async fn delete(&self, key: &str) -> AdapterResult<()> {
        let full_key = self.namespaced_key(key);
        let mut conn = self.db.manager()?;

        let _: () = conn
            .del(&full_key)
            .await
            .map_err(|e| AdapterError::Cache(format!("DEL {} failed: {}", full_key, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_key() {
        assert_eq!(
            namespaced_key("market_data:cache", "latest:BTC/USD"),
            "market_data:cache:latest:BTC/USD"
        );
        assert_eq!(namespaced_key("", "latest:BTC/USD"), "latest:BTC/USD");
    }

    #[tokio::test]
    async fn test_operations_require_connection() {
        let config = crate::config::AdapterConfig {
            redis_url: Some("redis://localhost:6379/0".to_string()),
            ..crate::config::AdapterConfig::default()
        };
        let db = Arc::new(RedisDatabase::new(&config).unwrap());
        let repo = RedisCacheRepository::new(db, "test:cache");

        // No connect() yet: every operation reports NotConnected
        assert!(matches!(
            repo.get("missing").await,
            Err(AdapterError::NotConnected(_))
        ));
        assert!(matches!(
            repo.set("k", "v", Duration::from_secs(5)).await,
            Err(AdapterError::NotConnected(_))
        ));
    }
}
