//! Market data adapter
//!
//! Data access layer for market data services. Exposes a uniform repository
//! interface over PostgreSQL (price feeds, candles, market snapshots,
//! symbols) and Redis (caching, service discovery), with schema and key
//! namespace derivation from service naming conventions.
//!
//! The adapter owns no authoritative state and implements no pooling of its
//! own; it configures and composes the diesel/r2d2 and redis-rs client
//! libraries behind a single construction point, [`MarketDataAdapter`].

pub mod adapter;
pub mod cache;
pub mod config;
pub mod database;
pub mod errors;
pub mod naming;

pub use adapter::{BackendStatus, ConnectReport, MarketDataAdapter};
pub use cache::{
    CacheRepository, RedisDatabase, ServiceDiscoveryRepository, ServiceRegistration, ServiceStatus,
};
pub use config::AdapterConfig;
pub use database::enums::CandleInterval;
pub use database::models::{
    Candle, CandleQuery, MarketSnapshot, MarketSnapshotQuery, PriceFeed, PriceFeedQuery, Symbol,
    SymbolQuery,
};
pub use database::repositories::{
    CandleRepository, MarketSnapshotRepository, PriceFeedRepository, SymbolRepository,
};
pub use database::PostgresDatabase;
pub use errors::{AdapterError, AdapterResult};
pub use naming::{derive_redis_namespace, derive_schema_name};
