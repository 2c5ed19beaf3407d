//! Repository pattern implementations for the relational entities
//!
//! One trait per entity defines the binding interface contract. The Postgres
//! implementations are deliberate placeholders: every method fails with
//! `NotImplemented` until real persistence logic lands (see DESIGN.md), but
//! the signatures are what callers compile against.

pub mod candle_repository;
pub mod market_snapshot_repository;
pub mod price_feed_repository;
pub mod symbol_repository;

pub use candle_repository::{CandleRepository, PostgresCandleRepository};
pub use market_snapshot_repository::{MarketSnapshotRepository, PostgresMarketSnapshotRepository};
pub use price_feed_repository::{PostgresPriceFeedRepository, PriceFeedRepository};
pub use symbol_repository::{PostgresSymbolRepository, SymbolRepository};
