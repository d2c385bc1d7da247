use std::sync::Arc;

use accounting::{
    AccountingServices, Deposit, InvoiceHistoryTask, InvoiceTask, router,
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use list_cache::{ListCacheSettings, ListQueryHandler};
use redis_connection::CacheStore;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use test_utils::{FakeSource, memory_cache};
use tower::ServiceExt;

struct Harness {
    app: Router,
    deposits: Arc<FakeSource<Deposit>>,
    history: Arc<FakeSource<InvoiceHistoryTask>>,
    cache: Arc<dyn CacheStore>,
}

fn deposit(id: i32, emp_id: i32, description: &str) -> Deposit {
    Deposit {
        deposit_id: Some(id),
        deposit: Some(Decimal::new(125050, 2)),
        deposit_num: Some(id * 10),
        emp_id: Some(emp_id),
        deposit_date: None,
        description: description.to_string(),
    }
}

fn history_row(uid: i32, emp_id: i32, company: &str) -> InvoiceHistoryTask {
    serde_json::from_value(json!({
        "uid": uid,
        "task_id": uid + 100,
        "cust_id": "C100",
        "week_of": "2024-06-03T00:00:00",
        "company": company,
        "charge": "45.00",
        "done_by": "Crew A",
        "emp_id": emp_id,
        "cash_paid": null,
        "commission": 0.25,
        "tax": null,
        "route": "R1",
        "cod": false,
        "voucher": false,
        "price": "45.00",
        "description": "Weekly service",
        "taxable": true,
        "comm": null,
        "master_id": "M1",
        "other_bill": false,
        "task_type": "Service",
        "comment": "",
        "adjust_amount": null,
        "mailto": false,
        "task_order": 1,
        "adv_date": null,
        "adv_bill": false,
        "order": null,
        "adv_freq": 0,
        "adv_credit": -1,
        "spec_note": false,
        "frequency": 1,
        "spec_equip": false,
        "week_done": null,
        "emp_paid": false,
        "work_order": "WO-1",
        "invoice_number": "INV-9"
    }))
    .unwrap()
}

fn harness() -> Harness {
    let cache = memory_cache();
    let settings = ListCacheSettings::default();
    let deposits = FakeSource::new(vec![
        deposit(1, 42, "Bank of Springfield"),
        deposit(2, 7, "Petty cash"),
    ]);
    let history = FakeSource::new(vec![
        history_row(10, 42, "Acme Corp"),
        history_row(11, 42, "Zeta LLC"),
    ]);
    let tasks = FakeSource::<InvoiceTask>::new(vec![]);

    let services = AccountingServices {
        deposits: ListQueryHandler::new(
            deposits.clone(),
            cache.clone(),
            settings,
        ),
        invoice_tasks: ListQueryHandler::new(tasks, cache.clone(), settings),
        invoice_history: ListQueryHandler::new(
            history.clone(),
            cache.clone(),
            settings,
        ),
    };

    Harness {
        app: router().with_state(services),
        deposits,
        history,
        cache,
    }
}

async fn send(
    app: &Router, request: Request<Body>,
) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get("x-cache")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_deposits_envelope_and_money_as_string() {
    let h = harness();

    let (status, cache, body) = send(&h.app, get("/deposits")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("miss"));
    assert_eq!(body["count"], 2);
    assert_eq!(body["deposits"][0]["deposit"], "1250.50");
    assert_eq!(body["deposits"][1]["description"], "Petty cash");
}

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
    let h = harness();

    send(&h.app, get("/deposits?emp_id=42")).await;
    let (_, cache, _) = send(&h.app, get("/deposits?emp_id=42")).await;

    assert_eq!(cache.as_deref(), Some("hit"));
    assert_eq!(h.deposits.calls(), 1);
    assert!(
        h.cache
            .get("accounting_deposits_v1_emp_42")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_post_body_matches_get() {
    let h = harness();
    let request = Request::builder()
        .method("POST")
        .uri("/deposits")
        .header("content-type", "application/json")
        .body(Body::from(json!({"emp_id": 42}).to_string()))
        .unwrap();

    send(&h.app, request).await;
    let (_, cache, _) = send(&h.app, get("/deposits?emp_id=42")).await;

    assert_eq!(cache.as_deref(), Some("hit"));
}

#[tokio::test]
async fn test_count_only() {
    let h = harness();

    let (_, _, body) = send(&h.app, get("/deposits?count_only=1")).await;

    assert_eq!(body, json!({"count": 2}));
}

#[tokio::test]
async fn test_history_emp_key_has_its_own_segment() {
    let h = harness();

    send(&h.app, get("/invoice_history?emp_id=42")).await;

    assert!(
        h.cache
            .get("accounting_invoice_history_v1_emp_42")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_history_search_on_cached_page() {
    let h = harness();

    send(&h.app, get("/invoice_history")).await;
    let (_, cache, body) = send(&h.app, get("/invoice_history?q=acme")).await;

    assert_eq!(cache.as_deref(), Some("hit"));
    assert_eq!(body["count"], 1);
    assert_eq!(body["tasks"][0]["company"], "Acme Corp");
    assert_eq!(h.history.calls(), 1);
}

#[tokio::test]
async fn test_store_outage_is_an_empty_page() {
    let h = harness();
    h.deposits.set_failing(true);

    let (status, _, body) = send(&h.app, get("/deposits")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 0, "deposits": []}));
}

#[tokio::test]
async fn test_non_numeric_employee_is_rejected() {
    let h = harness();

    let (status, _, body) = send(&h.app, get("/deposits?emp_id=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
    assert_eq!(h.deposits.calls(), 0);
}

#[tokio::test]
async fn test_bad_json_body_is_rejected() {
    let h = harness();
    let request = Request::builder()
        .method("POST")
        .uri("/invoice_tasks")
        .header("content-type", "application/json")
        .body(Body::from("{\"uid\": "))
        .unwrap();

    let (status, _, body) = send(&h.app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}
