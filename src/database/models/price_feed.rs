use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SortOrder;

/// Price feed entry - one observed price from one source
///
/// Append-only: entries are created, queried by symbol/source/time range and
/// eventually removed by age-based retention. Never updated in place.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::database::schema::price_feeds)]
#[diesel(primary_key(feed_id))]
pub struct PriceFeed {
    /// Caller-supplied unique identifier
    pub feed_id: String,

    /// Trading pair code
    pub symbol: String,

    /// Observed price
    pub price: Decimal,

    /// Best bid at observation time
    pub bid: Option<Decimal>,

    /// Best ask at observation time
    pub ask: Option<Decimal>,

    /// 24h traded volume
    pub volume_24h: Option<Decimal>,

    /// Upstream source tag (e.g., exchange name)
    pub source: String,

    /// Observation timestamp (caller-supplied)
    pub timestamp: DateTime<Utc>,

    /// Free-form metadata
    pub metadata: Option<serde_json::Value>,
}

impl PriceFeed {
    /// Create a feed entry with the required fields
    pub fn new(
        feed_id: impl Into<String>,
        symbol: impl Into<String>,
        price: Decimal,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            feed_id: feed_id.into(),
            symbol: symbol.into(),
            price,
            bid: None,
            ask: None,
            volume_24h: None,
            source: source.into(),
            timestamp,
            metadata: None,
        }
    }

    /// Set bid/ask quotes
    pub fn with_quotes(mut self, bid: Decimal, ask: Decimal) -> Self {
        self.bid = Some(bid);
        self.ask = Some(ask);
        self
    }

    /// Set 24h volume
    pub fn with_volume_24h(mut self, volume: Decimal) -> Self {
        self.volume_24h = Some(volume);
        self
    }

    /// Mid price when both quotes are present
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }
}

/// Filters for price feed queries; `None` fields do not constrain the result
#[derive(Debug, Clone, Default)]
pub struct PriceFeedQuery {
    pub symbol: Option<String>,
    pub source: Option<String>,
    pub timestamp_from: Option<DateTime<Utc>>,
    pub timestamp_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}
