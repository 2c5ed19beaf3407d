use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::connection::PostgresDatabase;
use crate::database::models::{MarketSnapshot, MarketSnapshotQuery};
use crate::errors::{AdapterError, AdapterResult};

/// Market snapshot repository trait - append-only market state
#[async_trait::async_trait]
pub trait MarketSnapshotRepository: Send + Sync {
    /// Create a new market snapshot
    async fn create(&self, snapshot: &MarketSnapshot) -> AdapterResult<()>;

    /// Get snapshot by ID
    async fn get_by_id(&self, snapshot_id: &str) -> AdapterResult<MarketSnapshot>;

    /// Get the latest snapshot for a symbol
    async fn get_latest_by_symbol(&self, symbol: &str) -> AdapterResult<MarketSnapshot>;

    /// Get snapshot history for a symbol, newest first
    async fn get_by_symbol(&self, symbol: &str, limit: i64) -> AdapterResult<Vec<MarketSnapshot>>;

    /// Query snapshots with filters
    async fn query(&self, query: &MarketSnapshotQuery) -> AdapterResult<Vec<MarketSnapshot>>;

    /// Delete snapshots older than the cutoff; returns the number removed
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AdapterResult<u64>;
}

/// PostgreSQL market snapshot repository
///
/// Placeholder implementation; see `repositories` module docs.
pub struct PostgresMarketSnapshotRepository {
    db: Arc<PostgresDatabase>,
}

impl PostgresMarketSnapshotRepository {
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    /// Backend handle for the query bodies once they land
    pub fn database(&self) -> &PostgresDatabase {
        &self.db
    }
}

#[async_trait::async_trait]
impl MarketSnapshotRepository for PostgresMarketSnapshotRepository {
    async fn create(&self, _snapshot: &MarketSnapshot) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("create market snapshot"))
    }

    async fn get_by_id(&self, _snapshot_id: &str) -> AdapterResult<MarketSnapshot> {
        Err(AdapterError::NotImplemented("get market snapshot by id"))
    }

    async fn get_latest_by_symbol(&self, _symbol: &str) -> AdapterResult<MarketSnapshot> {
        Err(AdapterError::NotImplemented("get latest market snapshot"))
    }

    async fn get_by_symbol(
        &self,
        _symbol: &str,
        _limit: i64,
    ) -> AdapterResult<Vec<MarketSnapshot>> {
        Err(AdapterError::NotImplemented("get market snapshots by symbol"))
    }

    async fn query(&self, _query: &MarketSnapshotQuery) -> AdapterResult<Vec<MarketSnapshot>> {
        Err(AdapterError::NotImplemented("query market snapshots"))
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> AdapterResult<u64> {
        Err(AdapterError::NotImplemented("delete market snapshots older than"))
    }
}
