use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SortOrder;

/// Market snapshot entity - point-in-time view of a market
///
/// Append-only; "latest per symbol" is a first-class query.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::database::schema::market_snapshots)]
#[diesel(primary_key(snapshot_id))]
pub struct MarketSnapshot {
    /// Caller-supplied unique identifier
    pub snapshot_id: String,

    /// Trading pair code
    pub symbol: String,

    /// Last traded price
    pub last_price: Decimal,

    /// Best bid
    pub bid: Option<Decimal>,

    /// Best ask
    pub ask: Option<Decimal>,

    /// Bid/ask spread
    pub spread: Option<Decimal>,

    /// 24h traded volume
    pub volume_24h: Option<Decimal>,

    /// Absolute 24h price change
    pub price_change_24h: Option<Decimal>,

    /// Relative 24h price change, in percent
    pub price_change_percent_24h: Option<Decimal>,

    /// Snapshot timestamp (caller-supplied)
    pub timestamp: DateTime<Utc>,

    /// Free-form metadata
    pub metadata: Option<serde_json::Value>,
}

impl MarketSnapshot {
    /// Create a snapshot with the required fields
    pub fn new(
        snapshot_id: impl Into<String>,
        symbol: impl Into<String>,
        last_price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            symbol: symbol.into(),
            last_price,
            bid: None,
            ask: None,
            spread: None,
            volume_24h: None,
            price_change_24h: None,
            price_change_percent_24h: None,
            timestamp,
            metadata: None,
        }
    }

    /// Set bid/ask quotes and derive the spread from them
    pub fn with_quotes(mut self, bid: Decimal, ask: Decimal) -> Self {
        self.bid = Some(bid);
        self.ask = Some(ask);
        self.spread = Some(ask - bid);
        self
    }

    /// Set 24h change statistics
    pub fn with_change_24h(mut self, change: Decimal, change_percent: Decimal) -> Self {
        self.price_change_24h = Some(change);
        self.price_change_percent_24h = Some(change_percent);
        self
    }
}

/// Filters for snapshot queries; `None` fields do not constrain the result
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshotQuery {
    pub symbol: Option<String>,
    pub timestamp_from: Option<DateTime<Utc>>,
    pub timestamp_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}
