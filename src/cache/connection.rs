//! Redis connection lifecycle
//!
//! Thin wrapper around the redis-rs `ConnectionManager`. Retry count and
//! connect/response timeouts are pass-through configuration; reconnection
//! behavior itself belongs to the client library.

use std::time::Duration;

use parking_lot::RwLock;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};

use crate::config::AdapterConfig;
use crate::errors::{AdapterError, AdapterResult};

/// Redis backend with lazy connection establishment
///
/// Mirrors `PostgresDatabase`: the manager is built in `connect()` so the
/// adapter can be constructed before the infrastructure is reachable. Until
/// then `manager()` and `health_check()` fail with `NotConnected`.
pub struct RedisDatabase {
    url: String,
    max_retries: usize,
    connect_timeout: Duration,
    response_timeout: Duration,
    manager: RwLock<Option<ConnectionManager>>,
}

impl RedisDatabase {
    /// Create the backend from configuration; requires `redis_url`
    pub fn new(config: &AdapterConfig) -> AdapterResult<Self> {
        let url = config
            .redis_url
            .clone()
            .ok_or_else(|| AdapterError::Configuration("Redis URL is required".to_string()))?;

        Ok(Self {
            url,
            max_retries: config.redis_max_retries,
            connect_timeout: config.redis_connect_timeout,
            response_timeout: config.redis_response_timeout,
            manager: RwLock::new(None),
        })
    }

    /// Open the connection manager and validate it with a PING
    ///
    /// Idempotent: reconnecting an already connected backend is a no-op.
    /// A malformed URL fails here with a `Connection` error.
    pub async fn connect(&self) -> AdapterResult<()> {
        if self.manager.read().is_some() {
            return Ok(());
        }

        let client = redis::Client::open(self.url.as_str())
            .map_err(|e| AdapterError::Connection(format!("failed to parse Redis URL: {}", e)))?;

        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(self.max_retries)
            .set_connection_timeout(self.connect_timeout)
            .set_response_timeout(self.response_timeout);

        let mut manager = ConnectionManager::new_with_config(client, manager_config)
            .await
            .map_err(|e| AdapterError::Connection(format!("failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<String>(&mut manager)
            .await
            .map_err(|e| AdapterError::Connection(format!("failed to ping Redis: {}", e)))?;

        *self.manager.write() = Some(manager);
        tracing::info!("Redis connected");
        Ok(())
    }

    /// Drop the connection manager; idempotent
    pub async fn disconnect(&self) -> AdapterResult<()> {
        if self.manager.write().take().is_some() {
            tracing::info!("Redis disconnected");
        }
        Ok(())
    }

    /// Liveness probe: PING
    pub async fn health_check(&self) -> AdapterResult<()> {
        let mut manager = self.manager()?;
        redis::cmd("PING")
            .query_async::<String>(&mut manager)
            .await
            .map_err(|e| AdapterError::Connection(format!("Redis ping failed: {}", e)))?;
        Ok(())
    }

    /// Clone of the live connection manager for repository use
    ///
    /// `ConnectionManager` is a cheap handle; clones share the underlying
    /// multiplexed connection.
    pub fn manager(&self) -> AdapterResult<ConnectionManager> {
        self.manager
            .read()
            .clone()
            .ok_or(AdapterError::NotConnected("Redis"))
    }

    /// Whether `connect()` has succeeded and the manager is live
    pub fn is_connected(&self) -> bool {
        self.manager.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_url() {
        let config = AdapterConfig::default();
        assert!(matches!(
            RedisDatabase::new(&config),
            Err(AdapterError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_health_check_before_connect() {
        let config = AdapterConfig {
            redis_url: Some("redis://localhost:6379/0".to_string()),
            ..AdapterConfig::default()
        };
        let db = RedisDatabase::new(&config).unwrap();

        assert!(!db.is_connected());
        assert!(matches!(
            db.health_check().await,
            Err(AdapterError::NotConnected(_))
        ));
        assert!(matches!(db.manager(), Err(AdapterError::NotConnected(_))));
    }

    #[tokio::test]
    async fn test_connect_unreachable_target() {
        let config = AdapterConfig {
            redis_url: Some("redis://127.0.0.1:1/0".to_string()),
            redis_max_retries: 0,
            redis_connect_timeout: Duration::from_millis(300),
            redis_response_timeout: Duration::from_millis(300),
            ..AdapterConfig::default()
        };
        let db = RedisDatabase::new(&config).unwrap();

        assert!(matches!(db.connect().await, Err(AdapterError::Connection(_))));
        assert!(!db.is_connected());
    }
}
