use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use customers::{CustomerServices, Site, router};
use list_cache::{ListCacheSettings, ListQueryHandler};
use redis_connection::CacheStore;
use serde_json::Value;
use test_utils::{FakeSource, memory_cache};
use tower::ServiceExt;

struct Harness {
    app: Router,
    source: Arc<FakeSource<Site>>,
    cache: Arc<dyn CacheStore>,
}

fn site(cust_id: &str, master_id: &str, company: &str) -> Site {
    Site {
        cust_id: cust_id.to_string(),
        master_id: Some(master_id.to_string()),
        company: company.to_string(),
        city: "Minneapolis".to_string(),
        state: "MN".to_string(),
        active: Some(true),
        ..Site::default()
    }
}

fn harness() -> Harness {
    let cache = memory_cache();
    let source = FakeSource::new(vec![
        site("A1", "M1", "Acme Corp"),
        site("Z9", "M1", "Zeta LLC"),
    ]);
    let services = CustomerServices {
        sites: ListQueryHandler::new(
            source.clone(),
            cache.clone(),
            ListCacheSettings::default(),
        ),
    };

    Harness {
        app: router().with_state(services),
        source,
        cache,
    }
}

async fn send(app: &Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get("x-cache")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_acme_search_served_from_cached_page() {
    let h = harness();
    send(&h.app, "/sites").await;

    let (status, cache, body) = send(&h.app, "/sites?q=acme").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("hit"));
    assert_eq!(body["count"], 1);
    assert_eq!(body["sites"][0]["cust_id"], "A1");
    assert_eq!(h.source.calls(), 1);
}

#[tokio::test]
async fn test_master_key_segment() {
    let h = harness();

    send(&h.app, "/sites?master_id=M1").await;

    assert!(
        h.cache
            .get("customers_sites_v1_master_m1")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_combined_filters_bypass_cache() {
    let h = harness();

    send(&h.app, "/sites?cust_id=A1&company=acme").await;
    let (_, cache, _) = send(&h.app, "/sites?cust_id=A1&company=acme").await;

    assert_eq!(cache.as_deref(), Some("bypass"));
    assert_eq!(h.source.calls(), 2);
}

#[tokio::test]
async fn test_refresh_header_requeries() {
    let h = harness();
    send(&h.app, "/sites").await;

    let request = Request::builder()
        .uri("/sites")
        .header("cache-control", "no-cache")
        .body(Body::empty())
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-cache"], "miss");
    assert_eq!(h.source.calls(), 2);
}

#[tokio::test]
async fn test_bad_billing_cycle_is_rejected() {
    let h = harness();

    let (status, _, body) = send(&h.app, "/sites?billing_cycle=monthly").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
}
