use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::enums::CandleInterval;

use super::SortOrder;

/// OHLCV candle entity
///
/// Upserted idempotently on its identifying key; queried by symbol+interval
/// or by time range.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::database::schema::candles)]
#[diesel(primary_key(candle_id))]
pub struct Candle {
    /// Caller-supplied unique identifier
    pub candle_id: String,

    /// Trading pair code
    pub symbol: String,

    /// Aggregation interval
    pub interval: CandleInterval,

    /// Opening price
    pub open: Decimal,

    /// Highest price in the interval
    pub high: Decimal,

    /// Lowest price in the interval
    pub low: Decimal,

    /// Closing price
    pub close: Decimal,

    /// Traded volume in the interval
    pub volume: Decimal,

    /// Interval start (caller-supplied)
    pub start_time: DateTime<Utc>,

    /// Interval end (caller-supplied)
    pub end_time: DateTime<Utc>,

    /// Number of trades aggregated, when known
    pub num_trades: Option<i32>,

    /// Free-form metadata
    pub metadata: Option<serde_json::Value>,
}

impl Candle {
    /// Candle range (high - low)
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Candle body size (abs(close - open))
    pub fn body_size(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// True when the candle closed above its open
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Filters for candle queries; `None` fields do not constrain the result
#[derive(Debug, Clone, Default)]
pub struct CandleQuery {
    pub symbol: Option<String>,
    pub interval: Option<CandleInterval>,
    pub start_time_from: Option<DateTime<Utc>>,
    pub start_time_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_candle() -> Candle {
        let now = Utc::now();
        Candle {
            candle_id: "candle-1".to_string(),
            symbol: "BTC/USD".to_string(),
            interval: CandleInterval::OneHour,
            open: dec!(64000),
            high: dec!(65500),
            low: dec!(63800),
            close: dec!(65000),
            volume: dec!(321.5),
            start_time: now,
            end_time: now + chrono::Duration::hours(1),
            num_trades: Some(1842),
            metadata: None,
        }
    }

    #[test]
    fn test_candle_range_and_body() {
        let candle = sample_candle();
        assert_eq!(candle.range(), dec!(1700));
        assert_eq!(candle.body_size(), dec!(1000));
    }

    #[test]
    fn test_candle_direction() {
        let mut candle = sample_candle();
        assert!(candle.is_bullish());

        candle.close = dec!(63900);
        assert!(!candle.is_bullish());
    }
}
