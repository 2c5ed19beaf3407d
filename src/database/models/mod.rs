pub mod candle;
pub mod market_snapshot;
pub mod price_feed;
pub mod symbol;

pub use candle::{Candle, CandleQuery};
pub use market_snapshot::{MarketSnapshot, MarketSnapshotQuery};
pub use price_feed::{PriceFeed, PriceFeedQuery};
pub use symbol::{Symbol, SymbolQuery};

use serde::{Deserialize, Serialize};

/// Result ordering requested by the caller
///
/// Ordering is a caller-specified filter; the adapter never enforces a
/// default direction of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
