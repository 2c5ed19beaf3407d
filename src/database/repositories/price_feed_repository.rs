use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::connection::PostgresDatabase;
use crate::database::models::{PriceFeed, PriceFeedQuery};
use crate::errors::{AdapterError, AdapterResult};

/// Price feed repository trait - append-only price observations
#[async_trait::async_trait]
pub trait PriceFeedRepository: Send + Sync {
    /// Create a new price feed entry
    async fn create(&self, feed: &PriceFeed) -> AdapterResult<()>;

    /// Get price feed entry by ID
    async fn get_by_id(&self, feed_id: &str) -> AdapterResult<PriceFeed>;

    /// Get the latest price for a symbol
    async fn get_latest_by_symbol(&self, symbol: &str) -> AdapterResult<PriceFeed>;

    /// Get price history for a symbol, newest first
    async fn get_by_symbol(&self, symbol: &str, limit: i64) -> AdapterResult<Vec<PriceFeed>>;

    /// Query price feeds with filters
    async fn query(&self, query: &PriceFeedQuery) -> AdapterResult<Vec<PriceFeed>>;

    /// Delete entries older than the cutoff; returns the number removed
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AdapterResult<u64>;
}

/// PostgreSQL price feed repository
///
/// Placeholder implementation: the schema is defined and the pool is wired,
/// but every operation fails with `NotImplemented` until the query bodies are
/// written.
pub struct PostgresPriceFeedRepository {
    db: Arc<PostgresDatabase>,
}

impl PostgresPriceFeedRepository {
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    /// Backend handle for the query bodies once they land
    pub fn database(&self) -> &PostgresDatabase {
        &self.db
    }
}

#[async_trait::async_trait]
impl PriceFeedRepository for PostgresPriceFeedRepository {
    async fn create(&self, _feed: &PriceFeed) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("create price feed"))
    }

    async fn get_by_id(&self, _feed_id: &str) -> AdapterResult<PriceFeed> {
        Err(AdapterError::NotImplemented("get price feed by id"))
    }

    async fn get_latest_by_symbol(&self, _symbol: &str) -> AdapterResult<PriceFeed> {
        Err(AdapterError::NotImplemented("get latest price feed by symbol"))
    }

    async fn get_by_symbol(&self, _symbol: &str, _limit: i64) -> AdapterResult<Vec<PriceFeed>> {
        Err(AdapterError::NotImplemented("get price feeds by symbol"))
    }

    async fn query(&self, _query: &PriceFeedQuery) -> AdapterResult<Vec<PriceFeed>> {
        Err(AdapterError::NotImplemented("query price feeds"))
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> AdapterResult<u64> {
        Err(AdapterError::NotImplemented("delete price feeds older than"))
    }
}
