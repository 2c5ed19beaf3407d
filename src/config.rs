//! Adapter configuration
//!
//! Configuration is supplied by the caller or loaded from the environment
//! (with `.env` support via dotenvy). Pool sizing, retry counts and timeouts
//! are pass-through values for the underlying client libraries; the adapter
//! configures them but implements no pooling of its own.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AdapterError, AdapterResult};

/// Configuration for the market data adapter
///
/// `postgres_url` and `redis_url` are optional: a backend without a URL is
/// simply not constructed and its repositories are unavailable. `schema_name`
/// and `redis_namespace` are derived from the service/instance names at
/// construction when left unset; explicit values are never overwritten.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Logical service name (e.g., "market-data-simulator")
    pub service_name: String,

    /// Deployed instance name; equals `service_name` for singleton
    /// deployments, carries an entity suffix for multi-instance ones
    pub service_instance_name: String,

    /// PostgreSQL connection URL; `None` disables the relational backend
    pub postgres_url: Option<String>,

    /// Redis connection URL; `None` disables caching and service discovery
    pub redis_url: Option<String>,

    /// Explicit PostgreSQL schema; derived from the names when `None`
    pub schema_name: Option<String>,

    /// Explicit Redis key prefix; derived from the names when `None`
    pub redis_namespace: Option<String>,

    /// Key prefix for service discovery records; defaults to
    /// `{redis_namespace}:discovery`
    pub service_discovery_namespace: Option<String>,

    /// Key prefix for cache entries; defaults to `{redis_namespace}:cache`
    pub cache_namespace: Option<String>,

    /// Maximum PostgreSQL pool size
    pub max_connections: u32,

    /// Minimum idle PostgreSQL connections kept by the pool
    pub min_idle_connections: Option<u32>,

    /// Checkout timeout for the PostgreSQL pool
    pub connection_timeout: Duration,

    /// Maximum lifetime of a pooled PostgreSQL connection
    pub connection_max_lifetime: Option<Duration>,

    /// Maximum idle time before a pooled PostgreSQL connection is reaped
    pub connection_max_idle_time: Option<Duration>,

    /// Command retry count for the Redis connection manager
    pub redis_max_retries: usize,

    /// Dial timeout for Redis connections
    pub redis_connect_timeout: Duration,

    /// Per-command response timeout for Redis
    pub redis_response_timeout: Duration,

    /// TTL applied to service discovery records; refreshed by heartbeats
    pub registration_ttl: Duration,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            service_name: "market-data-adapter".to_string(),
            service_instance_name: "market-data-adapter".to_string(),
            postgres_url: None,
            redis_url: None,
            schema_name: None,
            redis_namespace: None,
            service_discovery_namespace: None,
            cache_namespace: None,
            max_connections: 20,
            min_idle_connections: Some(2),
            connection_timeout: Duration::from_secs(30),
            connection_max_lifetime: Some(Duration::from_secs(30 * 60)),
            connection_max_idle_time: Some(Duration::from_secs(5 * 60)),
            redis_max_retries: 3,
            redis_connect_timeout: Duration::from_secs(5),
            redis_response_timeout: Duration::from_secs(3),
            registration_ttl: Duration::from_secs(30),
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables (with `.env` support)
    ///
    /// Unset variables fall back to [`AdapterConfig::default`] values.
    /// `SERVICE_INSTANCE_NAME` falls back to `SERVICE_NAME`, which yields the
    /// singleton deployment pattern.
    pub fn from_env() -> AdapterResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let service_name = env::var("SERVICE_NAME").unwrap_or(defaults.service_name);
        let service_instance_name =
            env::var("SERVICE_INSTANCE_NAME").unwrap_or_else(|_| service_name.clone());

        Ok(Self {
            service_name,
            service_instance_name,
            postgres_url: env::var("POSTGRES_URL").ok(),
            redis_url: env::var("REDIS_URL").ok(),
            schema_name: env::var("SCHEMA_NAME").ok(),
            redis_namespace: env::var("REDIS_NAMESPACE").ok(),
            service_discovery_namespace: env::var("SERVICE_DISCOVERY_NAMESPACE").ok(),
            cache_namespace: env::var("CACHE_NAMESPACE").ok(),
            max_connections: parse_env("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_idle_connections: parse_opt_env("DB_MIN_IDLE_CONNECTIONS")?
                .or(defaults.min_idle_connections),
            connection_timeout: secs_env("DB_CONNECTION_TIMEOUT_SECS", defaults.connection_timeout)?,
            connection_max_lifetime: opt_secs_env("DB_CONNECTION_MAX_LIFETIME_SECS")?
                .or(defaults.connection_max_lifetime),
            connection_max_idle_time: opt_secs_env("DB_CONNECTION_MAX_IDLE_SECS")?
                .or(defaults.connection_max_idle_time),
            redis_max_retries: parse_env("REDIS_MAX_RETRIES", defaults.redis_max_retries)?,
            redis_connect_timeout: secs_env(
                "REDIS_CONNECT_TIMEOUT_SECS",
                defaults.redis_connect_timeout,
            )?,
            redis_response_timeout: secs_env(
                "REDIS_RESPONSE_TIMEOUT_SECS",
                defaults.redis_response_timeout,
            )?,
            registration_ttl: secs_env(
                "SERVICE_REGISTRATION_TTL_SECS",
                defaults.registration_ttl,
            )?,
        })
    }

    /// Validate construction-time requirements
    ///
    /// Empty service/instance names are allowed; derivation degenerates to
    /// empty strings rather than failing.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.max_connections == 0 {
            return Err(AdapterError::Configuration(
                "DB_MAX_CONNECTIONS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> AdapterResult<T> {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|_| {
            AdapterError::Configuration(format!("invalid value for {}: {}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_opt_env<T: FromStr>(name: &str) -> AdapterResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            AdapterError::Configuration(format!("invalid value for {}: {}", name, raw))
        }),
        Err(_) => Ok(None),
    }
}

fn secs_env(name: &str, default: Duration) -> AdapterResult<Duration> {
    parse_env(name, default.as_secs()).map(Duration::from_secs)
}

fn opt_secs_env(name: &str) -> AdapterResult<Option<Duration>> {
    Ok(parse_opt_env::<u64>(name)?.map(Duration::from_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdapterConfig::default();
        assert_eq!(config.service_name, config.service_instance_name);
        assert!(config.postgres_url.is_none());
        assert!(config.redis_url.is_none());
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.registration_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_zero_pool() {
        let config = AdapterConfig {
            max_connections: 0,
            ..AdapterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AdapterError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(AdapterConfig::default().validate().is_ok());
    }
}
