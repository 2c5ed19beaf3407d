//! Integration tests against live PostgreSQL and Redis instances
//!
//! Gated on TEST_POSTGRES_URL / TEST_REDIS_URL; tests return early when the
//! corresponding backend is not available so the suite stays green in
//! environments without infrastructure.

use std::sync::Once;
use std::time::Duration;

use market_data_adapter::{AdapterConfig, MarketDataAdapter, PriceFeed, ServiceRegistration};
use rust_decimal_macros::dec;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "market_data_adapter=warn".into()),
            )
            .with_test_writer()
            .init();
    });
}

fn test_config() -> AdapterConfig {
    AdapterConfig {
        service_name: "market-data-test".to_string(),
        service_instance_name: "market-data-test".to_string(),
        postgres_url: std::env::var("TEST_POSTGRES_URL").ok(),
        redis_url: std::env::var("TEST_REDIS_URL").ok(),
        service_discovery_namespace: Some("test:market_data:discovery".to_string()),
        cache_namespace: Some("test:market_data:cache".to_string()),
        ..AdapterConfig::default()
    }
}

async fn connected_adapter() -> MarketDataAdapter {
    init_tracing();
    let adapter = MarketDataAdapter::new(test_config()).expect("adapter construction failed");
    let report = adapter.connect().await;
    assert!(
        report.fully_connected(),
        "test infrastructure unreachable: {:?}",
        report
    );
    adapter
}

#[tokio::test]
async fn cache_set_get_exists_delete() {
    if std::env::var("TEST_REDIS_URL").is_err() {
        return;
    }

    let adapter = connected_adapter().await;
    let cache = adapter.cache_repository().expect("cache repository");
    let key = format!("it:{}", uuid::Uuid::new_v4());

    cache
        .set(&key, "{\"price\":\"65000\"}", Duration::from_secs(60))
        .await
        .unwrap();

    assert_eq!(
        cache.get(&key).await.unwrap().as_deref(),
        Some("{\"price\":\"65000\"}")
    );
    assert!(cache.exists(&key).await.unwrap());

    cache.delete(&key).await.unwrap();
    assert!(!cache.exists(&key).await.unwrap());
    assert_eq!(cache.get(&key).await.unwrap(), None);

    adapter.disconnect().await.unwrap();
}

#[tokio::test]
async fn cache_entries_expire() {
    if std::env::var("TEST_REDIS_URL").is_err() {
        return;
    }

    let adapter = connected_adapter().await;
    let cache = adapter.cache_repository().expect("cache repository");
    let key = format!("it:{}", uuid::Uuid::new_v4());

    cache
        .set(&key, "ephemeral", Duration::from_secs(1))
        .await
        .unwrap();
    assert!(cache.exists(&key).await.unwrap());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!cache.exists(&key).await.unwrap());

    adapter.disconnect().await.unwrap();
}

#[tokio::test]
async fn service_discovery_lifecycle() {
    if std::env::var("TEST_REDIS_URL").is_err() {
        return;
    }

    let adapter = connected_adapter().await;
    let discovery = adapter
        .service_discovery_repository()
        .expect("discovery repository");

    let service_id = uuid::Uuid::new_v4().to_string();
    let registration = ServiceRegistration::new(
        service_id.as_str(),
        "test-market-data-service",
        "127.0.0.1",
        9100,
        "0.1.0",
    );

    discovery.register(&registration).await.unwrap();

    let instances = discovery.discover("test-market-data-service").await.unwrap();
    assert!(instances.iter().any(|i| i.service_id == service_id));

    let before = discovery.get_service_info(&service_id).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    discovery.heartbeat(&service_id).await.unwrap();
    let after = discovery.get_service_info(&service_id).await.unwrap();
    assert!(after.last_heartbeat > before.last_heartbeat);

    discovery.deregister(&service_id).await.unwrap();
    assert!(discovery.get_service_info(&service_id).await.is_err());

    adapter.disconnect().await.unwrap();
}

#[tokio::test]
async fn relational_repositories_report_not_implemented() {
    if std::env::var("TEST_POSTGRES_URL").is_err() {
        return;
    }

    let adapter = connected_adapter().await;
    let feeds = adapter.price_feed_repository().expect("feed repository");

    let feed = PriceFeed::new(
        uuid::Uuid::new_v4().to_string(),
        "BTC/USD",
        dec!(65000),
        "integration-test",
        chrono::Utc::now(),
    );
    assert!(feeds.create(&feed).await.unwrap_err().is_not_implemented());

    adapter.disconnect().await.unwrap();
}

#[tokio::test]
async fn health_check_with_live_backends() {
    if std::env::var("TEST_REDIS_URL").is_err() && std::env::var("TEST_POSTGRES_URL").is_err() {
        return;
    }

    let adapter = connected_adapter().await;
    adapter.health_check().await.unwrap();

    adapter.disconnect().await.unwrap();
    // After disconnect the strict check must fail again.
    assert!(adapter.health_check().await.is_err());
}
