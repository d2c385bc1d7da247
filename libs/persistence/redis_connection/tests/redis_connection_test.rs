use std::{sync::Arc, time::Duration};

use redis_connection::{
    CacheStore, CacheValue, Json, cache_provider::CacheProvider,
    config::{DbConnectConfig, MemoryConfig, RedisDbConfig},
};

const TTL: Duration = Duration::from_secs(600);

fn memory_store() -> Arc<dyn CacheStore> {
    CacheProvider::shared(CacheProvider::memory_backend(&MemoryConfig {
        capacity: 100,
    }))
}

#[tokio::test]
async fn test_redis_db_config_from_json() {
    let json = r#"{
        "host": "redis.example.com",
        "port": 6380,
        "db": 1
    }"#;

    let config: RedisDbConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.host(), "redis.example.com");
    assert_eq!(config.port(), 6380);
    assert_eq!(config.db(), 1);
    assert_eq!(config.password(), None);
}

#[tokio::test]
async fn test_backend_stores_json_pages() {
    let store = memory_store();
    let page = vec!["A1".to_string(), "Z9".to_string()];

    store
        .set(
            "payroll_sites_v1_all",
            Json(page.clone()).to_bytes().unwrap(),
            TTL,
            Some("payroll_sites_v1_keys"),
        )
        .await
        .unwrap();

    let bytes = store.get("payroll_sites_v1_all").await.unwrap().unwrap();
    let cached = Json::<Vec<String>>::from_bytes(&bytes).unwrap();
    assert_eq!(cached.inner(), page);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = memory_store();
    store
        .set("k", Json(1u8).to_bytes().unwrap(), TTL, None)
        .await
        .unwrap();

    assert!(store.delete("k").await.unwrap());
    assert!(store.get("k").await.unwrap().is_none());
    assert!(!store.delete("k").await.unwrap());
    assert!(store.get("k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_tag_purge_spans_all_derived_keys() {
    let store = memory_store();
    let tag = "hr_employees_v1_keys";
    for key in ["hr_employees_v1_all", "hr_employees_v1_id_42"] {
        store
            .set(key, Json(Vec::<u8>::new()).to_bytes().unwrap(), TTL, Some(tag))
            .await
            .unwrap();
    }

    assert_eq!(store.invalidate_tag(tag).await.unwrap(), 2);
    assert!(store.get("hr_employees_v1_all").await.unwrap().is_none());
    assert!(store.get("hr_employees_v1_id_42").await.unwrap().is_none());
}
