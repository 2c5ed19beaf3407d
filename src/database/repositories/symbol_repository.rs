use std::sync::Arc;

use crate::database::connection::PostgresDatabase;
use crate::database::models::{Symbol, SymbolQuery};
use crate::errors::{AdapterError, AdapterResult};

/// Symbol repository trait - instrument definitions
#[async_trait::async_trait]
pub trait SymbolRepository: Send + Sync {
    /// Create a new symbol
    async fn create(&self, symbol: &Symbol) -> AdapterResult<()>;

    /// Get symbol by ID
    async fn get_by_id(&self, symbol_id: &str) -> AdapterResult<Symbol>;

    /// Get symbol by trading pair code
    async fn get_by_symbol(&self, symbol: &str) -> AdapterResult<Symbol>;

    /// Query symbols with filters
    async fn query(&self, query: &SymbolQuery) -> AdapterResult<Vec<Symbol>>;

    /// Update a symbol
    async fn update(&self, symbol: &Symbol) -> AdapterResult<()>;

    /// Activate or deactivate a symbol
    async fn update_active_status(&self, symbol_id: &str, is_active: bool) -> AdapterResult<()>;

    /// Get all active symbols
    async fn get_active(&self) -> AdapterResult<Vec<Symbol>>;

    /// Delete symbol by ID
    async fn delete(&self, symbol_id: &str) -> AdapterResult<()>;
}

/// PostgreSQL symbol repository
///
/// Placeholder implementation; see `repositories` module docs.
pub struct PostgresSymbolRepository {
    db: Arc<PostgresDatabase>,
}

impl PostgresSymbolRepository {
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    /// Backend handle for the query bodies once they land
    pub fn database(&self) -> &PostgresDatabase {
        &self.db
    }
}

#[async_trait::async_trait]
impl SymbolRepository for PostgresSymbolRepository {
    async fn create(&self, _symbol: &Symbol) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("create symbol"))
    }

    async fn get_by_id(&self, _symbol_id: &str) -> AdapterResult<Symbol> {
        Err(AdapterError::NotImplemented("get symbol by id"))
    }

    async fn get_by_symbol(&self, _symbol: &str) -> AdapterResult<Symbol> {
        Err(AdapterError::NotImplemented("get symbol by code"))
    }

    async fn query(&self, _query: &SymbolQuery) -> AdapterResult<Vec<Symbol>> {
        Err(AdapterError::NotImplemented("query symbols"))
    }

    async fn update(&self, _symbol: &Symbol) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("update symbol"))
    }

    async fn update_active_status(&self, _symbol_id: &str, _is_active: bool) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("update symbol active status"))
    }

    async fn get_active(&self) -> AdapterResult<Vec<Symbol>> {
        Err(AdapterError::NotImplemented("get active symbols"))
    }

    async fn delete(&self, _symbol_id: &str) -> AdapterResult<()> {
        Err(AdapterError::NotImplemented("delete symbol"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdapterConfig;
    use chrono::Utc;

    #[tokio::test]
    async fn test_operations_report_not_implemented() {
        let config = AdapterConfig {
            postgres_url: Some("postgres://postgres@localhost/market_data".to_string()),
            ..AdapterConfig::default()
        };
        let repo =
            PostgresSymbolRepository::new(Arc::new(PostgresDatabase::new(&config).unwrap()));
        let symbol = Symbol::new("sym-1", "BTC/USD", "BTC", "USD", Utc::now());

        assert!(repo.create(&symbol).await.unwrap_err().is_not_implemented());
        assert!(repo
            .update_active_status("sym-1", false)
            .await
            .unwrap_err()
            .is_not_implemented());
        assert!(repo.get_active().await.unwrap_err().is_not_implemented());
    }
}
