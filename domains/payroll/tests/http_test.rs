use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use database_traits::{Condition, Scalar};
use list_cache::{ListCacheSettings, ListQueryHandler};
use payroll::{
    PSelect, PayrollComment, PayrollServices, PayrollSite, PayrollTask,
    TaskChoice, router,
};
use redis_connection::CacheStore;
use serde_json::{Value, json};
use test_utils::{FakeSource, memory_cache};
use tower::ServiceExt;

struct Harness {
    app: Router,
    sites: Arc<FakeSource<PayrollSite>>,
    tasks: Arc<FakeSource<PayrollTask>>,
    choices: Arc<FakeSource<TaskChoice>>,
    pselect: Arc<FakeSource<PSelect>>,
    cache: Arc<dyn CacheStore>,
}

fn site(cust_id: &str, company: &str) -> PayrollSite {
    PayrollSite {
        cust_id: cust_id.to_string(),
        company: company.to_string(),
        week_of: None,
        cod: false,
        mailto: false,
        taxable: true,
        voucher: false,
        other_bill: false,
        adv_bill: false,
        in_monthly: true,
    }
}

fn task(uid: i32) -> PayrollTask {
    serde_json::from_value(json!({
        "uid": uid,
        "id": 300,
        "cust_id": "A1",
        "week_of": "2024-06-03T00:00:00",
        "company": "Acme Corp",
        "charge": "45.00",
        "done_by": "Crew A",
        "emp_id": 42,
        "cash_paid": null,
        "commission": 0.35,
        "route": "R1",
        "cod": false,
        "price": "45.00",
        "description": "Wash windows in and out",
        "comm": "15.7500",
        "other_bill": false,
        "type": "WINDOWS",
        "comment": "",
        "order": 0,
        "task_order": 1,
        "spec_equip": false,
        "week_done": null,
        "work_order": "",
        "temp_deposit_date": null,
        "site_comm": false
    }))
    .unwrap()
}

fn selection(uid: i32) -> PSelect {
    PSelect {
        uid,
        emp_id: Some(42),
        start: "06/03/2024".into(),
        end: "06/09/2024".into(),
        week_done: String::new(),
        old_start: String::new(),
        old_end: String::new(),
        mile_rate: None,
        chk_price_paid: false,
        reim_exp: None,
        otime_percentage: Some(150),
        spec_equip: false,
        billing_date: String::new(),
        invoice_num: None,
        trav_dir: None,
    }
}

fn harness() -> Harness {
    let cache = memory_cache();
    let settings = ListCacheSettings::default();
    let comments = FakeSource::new(vec![PayrollComment {
        comment: "Rain delay".into(),
    }]);
    let sites = FakeSource::new(vec![
        site("A1", "Acme Corp"),
        site("Z9", "Zeta LLC"),
    ]);
    let tasks = FakeSource::new(vec![task(1), task(2)]);
    let choices = FakeSource::new(vec![TaskChoice {
        id: 300,
        cust_id: "A1".into(),
        description: "Wash windows in and out".into(),
        grand_total: None,
        task_order: Some(1),
    }]);
    let pselect = FakeSource::new(vec![selection(12)]);

    let services = PayrollServices {
        comments: ListQueryHandler::new(comments, cache.clone(), settings),
        sites: ListQueryHandler::new(sites.clone(), cache.clone(), settings),
        tasks: ListQueryHandler::new(tasks.clone(), cache.clone(), settings),
        task_selection: ListQueryHandler::new(
            choices.clone(),
            cache.clone(),
            settings,
        ),
        pselect: ListQueryHandler::new(
            pselect.clone(),
            cache.clone(),
            settings,
        ),
    };

    Harness {
        app: router().with_state(services),
        sites,
        tasks,
        choices,
        pselect,
        cache,
    }
}

async fn send(
    app: &Router, uri: &str,
) -> (StatusCode, Option<String>, Value) {
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
async fn test_comments_envelope() {
    let h = harness();

    let (status, _, body) = send(&h.app, "/comments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 1, "comments": [{"comment": "Rain delay"}]}));
}

#[tokio::test]
async fn test_sites_cached_per_customer() {
    let h = harness();

    send(&h.app, "/sites?cust_id=A1").await;
    let (_, cache, _) = send(&h.app, "/sites?cust_id=A1").await;

    assert_eq!(cache.as_deref(), Some("hit"));
    assert_eq!(h.sites.calls(), 1);
    assert!(
        h.cache
            .get("payroll_sites_v1_cust_A1")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_sites_search_on_cached_page() {
    let h = harness();
    send(&h.app, "/sites").await;

    let (_, cache, body) = send(&h.app, "/sites?q=zeta").await;

    assert_eq!(cache.as_deref(), Some("hit"));
    assert_eq!(body["count"], 1);
    assert_eq!(body["sites"][0]["cust_id"], "Z9");
    assert_eq!(h.sites.calls(), 1);
}

#[tokio::test]
async fn test_tasks_are_never_cached() {
    let h = harness();

    send(&h.app, "/tasks?route=r1").await;
    let (_, cache, body) = send(&h.app, "/tasks?route=r1").await;

    assert_eq!(cache.as_deref(), Some("bypass"));
    assert_eq!(h.tasks.calls(), 2);
    assert_eq!(body["tasks"][0]["charge"], "45.00");
    assert_eq!(body["tasks"][0]["type"], "WINDOWS");
}

#[tokio::test]
async fn test_task_selection_pushes_search_to_store() {
    let h = harness();

    let (_, _, body) = send(&h.app, "/task_selection?cust_id=a1&q=wash").await;

    let query = h.choices.last_query().unwrap();
    assert_eq!(query.search.map(|s| s.term), Some("wash".to_string()));
    assert_eq!(
        query.filters[0].condition,
        Condition::IExact("a1".to_string())
    );
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_pselect_without_psid_is_empty() {
    let h = harness();

    let (status, _, body) = send(&h.app, "/pselect").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 0, "pselect": []}));
    assert_eq!(h.pselect.calls(), 0);
}

#[tokio::test]
async fn test_pselect_by_uid_alias() {
    let h = harness();

    let (_, _, body) = send(&h.app, "/pselect?uid=12").await;

    let query = h.pselect.last_query().unwrap();
    assert_eq!(query.filters[0].column, "UID");
    assert_eq!(query.filters[0].condition, Condition::Exact(Scalar::Int(12)));
    assert_eq!(body["pselect"][0]["start"], "06/03/2024");
}

#[tokio::test]
async fn test_pselect_rejects_non_numeric_psid() {
    let h = harness();

    let (status, _, body) = send(&h.app, "/pselect?psid=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
}
