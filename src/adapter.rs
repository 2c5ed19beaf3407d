//! Adapter factory and facade
//!
//! Single construction point for the data access layer. The factory resolves
//! derived names (schema, Redis namespace), builds each backend only when its
//! connection URL is configured, and exposes a unified lifecycle across both.
//!
//! Partial infrastructure is tolerated by design: a backend that fails to
//! connect leaves the adapter in stub mode for that backend, reported through
//! [`ConnectReport`] instead of aborting startup. Health checks, in contrast,
//! are strict.

use std::sync::Arc;

use crate::cache::{
    CacheRepository, RedisCacheRepository, RedisDatabase, RedisServiceDiscovery,
    ServiceDiscoveryRepository,
};
use crate::config::AdapterConfig;
use crate::database::repositories::{
    CandleRepository, MarketSnapshotRepository, PostgresCandleRepository,
    PostgresMarketSnapshotRepository, PostgresPriceFeedRepository, PostgresSymbolRepository,
    PriceFeedRepository, SymbolRepository,
};
use crate::database::PostgresDatabase;
use crate::errors::{AdapterError, AdapterResult};
use crate::naming::{derive_redis_namespace, derive_schema_name};

/// Outcome of a single backend's connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Backend reachable and validated
    Connected,

    /// Backend configured but unreachable; adapter continues in stub mode
    Degraded(String),

    /// No connection URL configured for this backend
    NotConfigured,
}

impl BackendStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendStatus::Connected)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, BackendStatus::Degraded(_))
    }
}

/// Per-backend result of [`MarketDataAdapter::connect`]
///
/// Connection failures are downgraded to `Degraded` entries here rather than
/// surfaced as errors, keeping stub mode observable and testable.
#[derive(Debug, Clone)]
pub struct ConnectReport {
    pub postgres: BackendStatus,
    pub redis: BackendStatus,
}

impl ConnectReport {
    /// True when every configured backend connected
    pub fn fully_connected(&self) -> bool {
        !self.postgres.is_degraded() && !self.redis.is_degraded()
    }
}

/// Facade over the PostgreSQL repositories and the Redis cache/discovery
///
/// Repository accessors return `None` for backends without a configured
/// connection URL; callers must treat an absent repository as "feature
/// unavailable", not as an error.
pub struct MarketDataAdapter {
    config: AdapterConfig,

    // Infrastructure
    postgres: Option<Arc<PostgresDatabase>>,
    redis: Option<Arc<RedisDatabase>>,

    // Repositories
    price_feeds: Option<Arc<dyn PriceFeedRepository>>,
    candles: Option<Arc<dyn CandleRepository>>,
    market_snapshots: Option<Arc<dyn MarketSnapshotRepository>>,
    symbols: Option<Arc<dyn SymbolRepository>>,
    service_discovery: Option<Arc<dyn ServiceDiscoveryRepository>>,
    cache: Option<Arc<dyn CacheRepository>>,
}

impl MarketDataAdapter {
    /// Construct the adapter from configuration
    ///
    /// Fills `schema_name` and `redis_namespace` by derivation when unset
    /// (explicit values are never overwritten) and instantiates repositories
    /// for each backend whose URL is present. Construction fails only on
    /// configuration errors, never on unreachable infrastructure.
    pub fn new(mut config: AdapterConfig) -> AdapterResult<Self> {
        config.validate()?;

        if config.schema_name.is_none() {
            config.schema_name = Some(derive_schema_name(
                &config.service_name,
                &config.service_instance_name,
            ));
        }
        if config.redis_namespace.is_none() {
            config.redis_namespace = Some(derive_redis_namespace(
                &config.service_name,
                &config.service_instance_name,
            ));
        }

        let namespace = config.redis_namespace.clone().unwrap_or_default();
        if config.service_discovery_namespace.is_none() {
            config.service_discovery_namespace = Some(format!("{}:discovery", namespace));
        }
        if config.cache_namespace.is_none() {
            config.cache_namespace = Some(format!("{}:cache", namespace));
        }

        tracing::info!(
            service_name = %config.service_name,
            instance_name = %config.service_instance_name,
            schema_name = config.schema_name.as_deref().unwrap_or_default(),
            redis_namespace = config.redis_namespace.as_deref().unwrap_or_default(),
            "adapter configuration resolved"
        );

        let mut adapter = Self {
            config,
            postgres: None,
            redis: None,
            price_feeds: None,
            candles: None,
            market_snapshots: None,
            symbols: None,
            service_discovery: None,
            cache: None,
        };

        if adapter.config.postgres_url.is_some() {
            let postgres = Arc::new(PostgresDatabase::new(&adapter.config)?);
            adapter.price_feeds = Some(Arc::new(PostgresPriceFeedRepository::new(
                postgres.clone(),
            )));
            adapter.candles = Some(Arc::new(PostgresCandleRepository::new(postgres.clone())));
            adapter.market_snapshots = Some(Arc::new(PostgresMarketSnapshotRepository::new(
                postgres.clone(),
            )));
            adapter.symbols = Some(Arc::new(PostgresSymbolRepository::new(postgres.clone())));
            adapter.postgres = Some(postgres);
        } else {
            tracing::warn!("PostgreSQL URL not configured, relational repositories unavailable");
        }

        if adapter.config.redis_url.is_some() {
            let redis = Arc::new(RedisDatabase::new(&adapter.config)?);
            adapter.service_discovery = Some(Arc::new(RedisServiceDiscovery::new(
                redis.clone(),
                adapter
                    .config
                    .service_discovery_namespace
                    .clone()
                    .unwrap_or_default(),
                adapter.config.registration_ttl,
            )));
            adapter.cache = Some(Arc::new(RedisCacheRepository::new(
                redis.clone(),
                adapter.config.cache_namespace.clone().unwrap_or_default(),
            )));
            adapter.redis = Some(redis);
        } else {
            tracing::warn!("Redis URL not configured, cache and service discovery unavailable");
        }

        Ok(adapter)
    }

    /// Construct the adapter from environment variables
    pub fn from_env() -> AdapterResult<Self> {
        Self::new(AdapterConfig::from_env()?)
    }

    /// Attempt to connect every configured backend
    ///
    /// Each backend is attempted independently; failures degrade that backend
    /// (stub mode) and are reported in the [`ConnectReport`] rather than
    /// returned as errors.
    pub async fn connect(&self) -> ConnectReport {
        let postgres = match &self.postgres {
            Some(db) => match db.connect().await {
                Ok(()) => BackendStatus::Connected,
                Err(e) => {
                    tracing::warn!(error = %e, "PostgreSQL connect failed, continuing in stub mode");
                    BackendStatus::Degraded(e.to_string())
                }
            },
            None => BackendStatus::NotConfigured,
        };

        let redis = match &self.redis {
            Some(db) => match db.connect().await {
                Ok(()) => BackendStatus::Connected,
                Err(e) => {
                    tracing::warn!(error = %e, "Redis connect failed, continuing in stub mode");
                    BackendStatus::Degraded(e.to_string())
                }
            },
            None => BackendStatus::NotConfigured,
        };

        tracing::info!(?postgres, ?redis, "market data adapter connected");
        ConnectReport { postgres, redis }
    }

    /// Disconnect every configured backend, aggregating failures
    ///
    /// Both backends are always attempted; errors are collected and returned
    /// jointly instead of short-circuiting on the first.
    pub async fn disconnect(&self) -> AdapterResult<()> {
        let mut failures = Vec::new();

        if let Some(db) = &self.postgres {
            if let Err(e) = db.disconnect().await {
                failures.push(format!("PostgreSQL disconnect error: {}", e));
            }
        }
        if let Some(db) = &self.redis {
            if let Err(e) = db.disconnect().await {
                failures.push(format!("Redis disconnect error: {}", e));
            }
        }

        if !failures.is_empty() {
            return Err(AdapterError::Connection(failures.join("; ")));
        }

        tracing::info!("market data adapter disconnected");
        Ok(())
    }

    /// Strict health check across both backends
    ///
    /// PostgreSQL is probed first; the first failure propagates immediately
    /// and stops further checks.
    pub async fn health_check(&self) -> AdapterResult<()> {
        if let Some(db) = &self.postgres {
            db.health_check().await?;
        }
        if let Some(db) = &self.redis {
            db.health_check().await?;
        }
        Ok(())
    }

    /// Resolved configuration, including derived names
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Resolved PostgreSQL schema name
    pub fn schema_name(&self) -> &str {
        self.config.schema_name.as_deref().unwrap_or_default()
    }

    /// Resolved Redis key namespace
    pub fn redis_namespace(&self) -> &str {
        self.config.redis_namespace.as_deref().unwrap_or_default()
    }

    // Repository accessors; `None` means the backend is not configured.

    pub fn price_feed_repository(&self) -> Option<Arc<dyn PriceFeedRepository>> {
        self.price_feeds.clone()
    }

    pub fn candle_repository(&self) -> Option<Arc<dyn CandleRepository>> {
        self.candles.clone()
    }

    pub fn market_snapshot_repository(&self) -> Option<Arc<dyn MarketSnapshotRepository>> {
        self.market_snapshots.clone()
    }

    pub fn symbol_repository(&self) -> Option<Arc<dyn SymbolRepository>> {
        self.symbols.clone()
    }

    pub fn service_discovery_repository(&self) -> Option<Arc<dyn ServiceDiscoveryRepository>> {
        self.service_discovery.clone()
    }

    pub fn cache_repository(&self) -> Option<Arc<dyn CacheRepository>> {
        self.cache.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn singleton_config() -> AdapterConfig {
        AdapterConfig {
            service_name: "market-data-simulator".to_string(),
            service_instance_name: "market-data-simulator".to_string(),
            ..AdapterConfig::default()
        }
    }

    #[test]
    fn test_backendless_construction_succeeds() {
        let adapter = MarketDataAdapter::new(singleton_config()).unwrap();

        assert!(adapter.price_feed_repository().is_none());
        assert!(adapter.candle_repository().is_none());
        assert!(adapter.market_snapshot_repository().is_none());
        assert!(adapter.symbol_repository().is_none());
        assert!(adapter.service_discovery_repository().is_none());
        assert!(adapter.cache_repository().is_none());
    }

    #[test]
    fn test_singleton_name_derivation() {
        let adapter = MarketDataAdapter::new(singleton_config()).unwrap();

        assert_eq!(adapter.schema_name(), "market_data");
        assert_eq!(adapter.redis_namespace(), "market_data");
        assert_eq!(
            adapter.config().service_discovery_namespace.as_deref(),
            Some("market_data:discovery")
        );
        assert_eq!(
            adapter.config().cache_namespace.as_deref(),
            Some("market_data:cache")
        );
    }

    #[test]
    fn test_multi_instance_name_derivation() {
        let config = AdapterConfig {
            service_name: "market-data-simulator".to_string(),
            service_instance_name: "market-data-Coinmetrics".to_string(),
            ..AdapterConfig::default()
        };
        let adapter = MarketDataAdapter::new(config).unwrap();

        assert_eq!(adapter.schema_name(), "market_data_coinmetrics");
        assert_eq!(adapter.redis_namespace(), "market_data:Coinmetrics");
    }

    #[test]
    fn test_explicit_names_are_never_overwritten() {
        let config = AdapterConfig {
            schema_name: Some("custom_schema".to_string()),
            redis_namespace: Some("custom:ns".to_string()),
            ..singleton_config()
        };
        let adapter = MarketDataAdapter::new(config).unwrap();

        assert_eq!(adapter.schema_name(), "custom_schema");
        assert_eq!(adapter.redis_namespace(), "custom:ns");
    }

    #[test]
    fn test_postgres_url_enables_relational_repositories() {
        let config = AdapterConfig {
            postgres_url: Some("postgres://postgres@localhost/market_data".to_string()),
            ..singleton_config()
        };
        let adapter = MarketDataAdapter::new(config).unwrap();

        assert!(adapter.price_feed_repository().is_some());
        assert!(adapter.symbol_repository().is_some());
        // Redis side stays unavailable
        assert!(adapter.cache_repository().is_none());
    }

    #[tokio::test]
    async fn test_connect_without_backends() {
        let adapter = MarketDataAdapter::new(singleton_config()).unwrap();
        let report = adapter.connect().await;

        assert_eq!(report.postgres, BackendStatus::NotConfigured);
        assert_eq!(report.redis, BackendStatus::NotConfigured);
        assert!(report.fully_connected());

        assert!(adapter.health_check().await.is_ok());
        assert!(adapter.disconnect().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_degrades_on_unreachable_redis() {
        let config = AdapterConfig {
            redis_url: Some("redis://127.0.0.1:1/0".to_string()),
            redis_max_retries: 0,
            redis_connect_timeout: Duration::from_millis(300),
            redis_response_timeout: Duration::from_millis(300),
            ..singleton_config()
        };
        let adapter = MarketDataAdapter::new(config).unwrap();

        let report = adapter.connect().await;
        assert_eq!(report.postgres, BackendStatus::NotConfigured);
        assert!(report.redis.is_degraded());
        assert!(!report.fully_connected());

        // Stub mode: repositories still exist, but strict health checks fail
        // and name the key-value backend.
        assert!(adapter.cache_repository().is_some());
        match adapter.health_check().await {
            Err(AdapterError::NotConnected(backend)) => assert_eq!(backend, "Redis"),
            other => panic!("expected Redis NotConnected, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent() {
        let config = AdapterConfig {
            postgres_url: Some("postgres://postgres@localhost/market_data".to_string()),
            redis_url: Some("redis://localhost:6379/0".to_string()),
            ..singleton_config()
        };
        let adapter = MarketDataAdapter::new(config).unwrap();

        // Never connected; disconnect must still succeed on both backends.
        assert!(adapter.disconnect().await.is_ok());
        assert!(adapter.disconnect().await.is_ok());
    }
}
