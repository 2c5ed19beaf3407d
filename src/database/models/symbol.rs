use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SortOrder;

/// Symbol entity - a tradeable instrument definition
///
/// Identifiers and timestamps are caller-supplied; the adapter never stamps
/// them.
#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Insertable, AsChangeset, Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::database::schema::symbols)]
#[diesel(primary_key(symbol_id))]
pub struct Symbol {
    /// Caller-supplied unique identifier
    pub symbol_id: String,

    /// Trading pair code (e.g., "BTC/USD")
    pub symbol: String,

    /// Base currency of the pair
    pub base_currency: String,

    /// Quote currency of the pair
    pub quote_currency: String,

    /// Optional human-readable name
    pub display_name: Option<String>,

    /// Whether the symbol is currently tradeable
    pub is_active: bool,

    /// Minimum price increment
    pub min_price_movement: Option<Decimal>,

    /// Minimum order size
    pub min_order_size: Option<Decimal>,

    /// Maximum order size
    pub max_order_size: Option<Decimal>,

    /// Creation timestamp (caller-supplied)
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (caller-supplied)
    pub updated_at: DateTime<Utc>,

    /// Free-form metadata
    pub metadata: Option<serde_json::Value>,
}

impl Symbol {
    /// Create a new active symbol with the required fields
    pub fn new(
        symbol_id: impl Into<String>,
        symbol: impl Into<String>,
        base_currency: impl Into<String>,
        quote_currency: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol_id: symbol_id.into(),
            symbol: symbol.into(),
            base_currency: base_currency.into(),
            quote_currency: quote_currency.into(),
            display_name: None,
            is_active: true,
            min_price_movement: None,
            min_order_size: None,
            max_order_size: None,
            created_at: timestamp,
            updated_at: timestamp,
            metadata: None,
        }
    }

    /// Set display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set order size bounds
    pub fn with_order_size_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_order_size = Some(min);
        self.max_order_size = Some(max);
        self
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Filters for symbol queries; `None` fields do not constrain the result
#[derive(Debug, Clone, Default)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
    pub base_currency: Option<String>,
    pub quote_currency: Option<String>,
    pub is_active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}
