use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::cache::connection::RedisDatabase;
use crate::errors::{AdapterError, AdapterResult};

/// Reported health of a registered service instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Service discovery record stored in Redis
///
/// Records live under `{namespace}:{service_id}` with a TTL; instances that
/// stop heartbeating expire out of the registry on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRegistration {
    /// Unique instance identifier (caller-supplied)
    pub service_id: String,

    /// Logical service name shared by all instances
    pub service_name: String,

    /// Network address instances can be reached at
    pub host: String,

    /// Port the instance listens on
    pub port: u16,

    /// Deployed version string
    pub version: String,

    /// Free-form metadata
    pub metadata: Option<serde_json::Value>,

    /// When the instance first registered
    pub registered_at: DateTime<Utc>,

    /// Last heartbeat time; refreshed by `heartbeat()`
    pub last_heartbeat: DateTime<Utc>,

    /// Reported health status
    pub status: ServiceStatus,
}

impl ServiceRegistration {
    /// Create a healthy registration stamped with the current time
    pub fn new(
        service_id: impl Into<String>,
        service_name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        version: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            service_id: service_id.into(),
            service_name: service_name.into(),
            host: host.into(),
            port,
            version: version.into(),
            metadata: None,
            registered_at: now,
            last_heartbeat: now,
            status: ServiceStatus::Healthy,
        }
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Service discovery repository trait
#[async_trait::async_trait]
pub trait ServiceDiscoveryRepository: Send + Sync {
    /// Register an instance; overwrites a previous registration with the same id
    async fn register(&self, registration: &ServiceRegistration) -> AdapterResult<()>;

    /// Refresh an instance's heartbeat timestamp and TTL
    async fn heartbeat(&self, service_id: &str) -> AdapterResult<()>;

    /// Remove an instance from the registry
    async fn deregister(&self, service_id: &str) -> AdapterResult<()>;

    /// Find all live instances of a service by name
    async fn discover(&self, service_name: &str) -> AdapterResult<Vec<ServiceRegistration>>;

    /// Fetch a single instance by id; absent records fail with `NotFound`
    async fn get_service_info(&self, service_id: &str) -> AdapterResult<ServiceRegistration>;
}

/// Redis-backed service discovery
pub struct RedisServiceDiscovery {
    db: Arc<RedisDatabase>,
    namespace: String,
    registration_ttl: Duration,
}

impl RedisServiceDiscovery {
    pub fn new(
        db: Arc<RedisDatabase>,
        namespace: impl Into<String>,
        registration_ttl: Duration,
    ) -> Self {
        Self {
            db,
            namespace: namespace.into(),
            registration_ttl,
        }
    }

    fn record_key(&self, service_id: &str) -> String {
        format!("{}:{}", self.namespace, service_id)
    }

    fn ttl_secs(&self) -> u64 {
        self.registration_ttl.as_secs().max(1)
    }

    async fn write_record(&self, registration: &ServiceRegistration) -> AdapterResult<()> {
        let key = self.record_key(&registration.service_id);
        let payload = serde_json::to_string(registration)?;
        let mut conn = self.db.manager()?;

        let _: () = conn
            .set_ex(&key, payload, self.ttl_secs())
            .await
            .map_err(|e| AdapterError::Cache(format!("SETEX {} failed: {}", key, e)))?;
        Ok(())
    }

    async fn read_record(&self, service_id: &str) -> AdapterResult<ServiceRegistration> {
        let key = self.record_key(service_id);
        let mut conn = self.db.manager()?;

        let payload: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| AdapterError::Cache(format!("GET {} failed: {}", key, e)))?;

        match payload {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Err(AdapterError::NotFound(format!(
                "service instance {}",
                service_id
            ))),
        }
    }
}

#[async_trait::async_trait]
impl ServiceDiscoveryRepository for RedisServiceDiscovery {
    async fn register(&self, registration: &ServiceRegistration) -> AdapterResult<()> {
        self.write_record(registration).await?;
        tracing::info!(
            service_id = %registration.service_id,
            service_name = %registration.service_name,
            "service registered"
        );
        Ok(())
    }

    async fn heartbeat(&self, service_id: &str) -> AdapterResult<()> {
        let mut record = self.read_record(service_id).await?;
        record.last_heartbeat = Utc::now();
        self.write_record(&record).await?;
        tracing::debug!(service_id = %service_id, "heartbeat refreshed");
        Ok(())
    }

    async fn deregister(&self, service_id: &str) -> AdapterResult<()> {
        let key = self.record_key(service_id);
        let mut conn = self.db.manager()?;

        let _: () = conn
            .del(&key)
            .await
            .map_err(|e| AdapterError::Cache(format!("DEL {} failed: {}", key, e)))?;
        tracing::info!(service_id = %service_id, "service deregistered");
        Ok(())
    }

    async fn discover(&self, service_name: &str) -> AdapterResult<Vec<ServiceRegistration>> {
        let pattern = format!("{}:*", self.namespace);
        let mut conn = self.db.manager()?;

        let keys: Vec<String> = conn
            .keys(&pattern)
            .await
            .map_err(|e| AdapterError::Cache(format!("KEYS {} failed: {}", pattern, e)))?;

        let mut instances = Vec::new();
        for key in keys {
            // Records can expire between KEYS and GET; skip the gaps.
            let payload: Option<String> = conn
                .get(&key)
                .await
                .map_err(|e| AdapterError::Cache(format!("GET {} failed: {}", key, e)))?;
            let Some(raw) = payload else { continue };

            let record: ServiceRegistration = serde_json::from_str(&raw)?;
            if record.service_name == service_name {
                instances.push(record);
            }
        }

        Ok(instances)
    }

    async fn get_service_info(&self, service_id: &str) -> AdapterResult<ServiceRegistration> {
        self.read_record(service_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_serde_round_trip() {
        let registration = ServiceRegistration::new(
            "market-data-001",
            "market-data-service",
            "10.0.0.12",
            8080,
            "1.4.2",
        )
        .with_metadata(serde_json::json!({"region": "eu-west-1"}));

        let json = serde_json::to_string(&registration).unwrap();
        let parsed: ServiceRegistration = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.service_id, "market-data-001");
        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.status, ServiceStatus::Healthy);
        assert_eq!(
            parsed.metadata.unwrap()["region"],
            serde_json::json!("eu-west-1")
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_record_key_layout() {
        let config = crate::config::AdapterConfig {
            redis_url: Some("redis://localhost:6379/0".to_string()),
            ..crate::config::AdapterConfig::default()
        };
        let db = Arc::new(RedisDatabase::new(&config).unwrap());
        let discovery =
            RedisServiceDiscovery::new(db, "market_data:discovery", Duration::from_secs(30));

        assert_eq!(
            discovery.record_key("abc-123"),
            "market_data:discovery:abc-123"
        );
    }
}
