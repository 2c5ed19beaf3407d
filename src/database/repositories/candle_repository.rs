use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::connection::PostgresDatabase;
use crate::database::enums::CandleInterval;
use crate::database::models::{Candle, CandleQuery};
use crate::errors::{AdapterError, AdapterResult};

/// Candle repository trait - idempotent OHLCV storage
#[async_trait::async_trait]
pub trait CandleRepository: Send + Sync {
    /// Create or update a candle, idempotent on its identifying key
    async fn upsert(&self, candle: &Candle) -> AdapterResult<()>;

    /// Get candle by ID
    async fn get_by_id(&self, candle_id: &str) -> AdapterResult<Candle>;

    /// Get candles for a symbol and interval, newest first
    async fn get_by_symbol_and_interval(
        &self,
        symbol: &str,
        interval: CandleInterval,
        limit: i64,
    ) -> AdapterResult<Vec<Candle>>;

    /// Query candles with filters
    async fn query(&self, query: &CandleQuery) -> AdapterResult<Vec<Candle>>;

    /// Get the latest candle for a symbol and interval
    async fn get_latest(&self, symbol: &str, interval: CandleInterval) -> AdapterResult<Candle>;

    /// Delete candles older than the cutoff; returns the number removed
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AdapterResult<u64>;
}

/// PostgreSQL candle repository
///
/// Placeholder implementation; see `repositories` module docs.
pub struct PostgresCandleRepository {
    db: Arc<PostgresDatabase>,
}

impl PostgresCandleRepository {
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    /// Backend handle for the query bodies once they land
    pub fn database(&self) -> &PostgresDatabase {
        &self.db
    }
}

#[async_trait::async_trait]
impl CandleRepository for PostgresCandleRepository {
    async fn upsert(&self, _candle: &Candle) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("upsert candle"))
    }

    async fn get_by_id(&self, _candle_id: &str) -> AdapterResult<Candle> {
        Err(AdapterError::NotImplemented("get candle by id"))
    }

    async fn get_by_symbol_and_interval(
        &self,
        _symbol: &str,
        _interval: CandleInterval,
        _limit: i64,
    ) -> AdapterResult<Vec<Candle>> {
        Err(AdapterError::NotImplemented("get candles by symbol and interval"))
    }

    async fn query(&self, _query: &CandleQuery) -> AdapterResult<Vec<Candle>> {
        Err(AdapterError::NotImplemented("query candles"))
    }

    async fn get_latest(&self, _symbol: &str, _interval: CandleInterval) -> AdapterResult<Candle> {
        Err(AdapterError::NotImplemented("get latest candle"))
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> AdapterResult<u64> {
        Err(AdapterError::NotImplemented("delete candles older than"))
    }
}
