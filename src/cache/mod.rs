//! Redis backend
//!
//! This module provides:
//! - Connection lifecycle over the redis-rs connection manager
//! - Namespaced pass-through caching
//! - TTL-based service discovery records

pub mod cache_repository;
pub mod connection;
pub mod service_discovery;

pub use cache_repository::{CacheRepository, RedisCacheRepository};
pub use connection::RedisDatabase;
pub use service_discovery::{
    RedisServiceDiscovery, ServiceDiscoveryRepository, ServiceRegistration, ServiceStatus,
};
