//! Error types for the market data adapter
//!
//! Centralizes the error taxonomy shared by the connection wrappers, the
//! repositories and the adapter facade, so callers match on one enum
//! regardless of which backend produced the failure.

use thiserror::Error;

/// Errors produced by adapter construction, lifecycle and repository calls
///
/// # Error Categories
///
/// - **Construction**: `Configuration`
/// - **Lifecycle**: `Connection`, `NotConnected`
/// - **Repository**: `NotImplemented`, `NotFound`, `Cache`, `Serialization`
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Construction-time configuration problem (missing URL, empty service name)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Dial, ping or close failure against a backend
    #[error("Connection error: {0}")]
    Connection(String),

    /// Lifecycle operation invoked before `connect()`
    #[error("Not connected: {0}")]
    NotConnected(&'static str),

    /// Placeholder repository operation; treat as "feature pending", not transient
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Requested record does not exist in the key-value store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Redis command failure during a repository operation
    #[error("Cache error: {0}")]
    Cache(String),

    /// JSON encoding/decoding failure for key-value payloads
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the adapter
pub type AdapterResult<T> = Result<T, AdapterError>;

impl AdapterError {
    /// True for placeholder repository operations
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, AdapterError::NotImplemented(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdapterError::Configuration("POSTGRES_URL is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: POSTGRES_URL is required"
        );

        let err = AdapterError::NotConnected("PostgreSQL");
        assert_eq!(err.to_string(), "Not connected: PostgreSQL");
    }

    #[test]
    fn test_is_not_implemented() {
        assert!(AdapterError::NotImplemented("create price feed").is_not_implemented());
        assert!(!AdapterError::Cache("timeout".to_string()).is_not_implemented());
    }
}
