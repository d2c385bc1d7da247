use std::sync::Arc;

use accounting::AccountingServices;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    routing::get,
};
use customers::CustomerServices;
use hr::HrServices;
use list_cache::{ListCacheSettings, X_CACHE};
use payroll::PayrollServices;
use redis_connection::CacheStore;
use routing::RoutingServices;
use serde::Serialize;
use sql_connection::SqlConnect;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::{OpenApi, ToSchema};
use utoipa_rapidoc::RapiDoc;

/// Everything the router needs, one service struct per domain.
#[derive(Clone)]
pub struct Services {
    pub accounting: AccountingServices,
    pub hr: HrServices,
    pub payroll: PayrollServices,
    pub customers: CustomerServices,
    pub routing: RoutingServices,
    pub health: HealthState,
}

impl Services {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            accounting: AccountingServices::new(
                db.clone(),
                cache.clone(),
                settings,
            ),
            hr: HrServices::new(db.clone(), cache.clone(), settings),
            payroll: PayrollServices::new(db.clone(), cache.clone(), settings),
            customers: CustomerServices::new(
                db.clone(),
                cache.clone(),
                settings,
            ),
            routing: RoutingServices::new(db.clone(), cache.clone(), settings),
            health: HealthState { db, cache },
        }
    }
}

#[derive(Clone)]
pub struct HealthState {
    db: SqlConnect,
    cache: Arc<dyn CacheStore>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub available: usize,
    pub size: usize,
    pub max_size: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: DatabaseHealth,
    pub cache: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Connection pool and cache backend status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(state): State<HealthState>,
) -> Json<HealthResponse> {
    let pool = state.db.get_pool_status();

    Json(HealthResponse {
        status: "ok".to_string(),
        database: DatabaseHealth {
            available: pool.available,
            size: pool.size,
            max_size: pool.max_size,
        },
        cache: state.cache.backend_name().to_string(),
    })
}

/// Any origin when `origins` is empty, otherwise exactly the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive().expose_headers([X_CACHE]);
    }

    let allowed = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, "ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::CACHE_CONTROL])
        .expose_headers([X_CACHE])
}

pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    let api = Router::new()
        .nest(
            "/accounting",
            accounting::router().with_state(services.accounting),
        )
        .nest("/hr", hr::router().with_state(services.hr))
        .nest("/payroll", payroll::router().with_state(services.payroll))
        .nest(
            "/customers",
            customers::router().with_state(services.customers),
        )
        .nest("/routing", routing::router().with_state(services.routing));

    Router::new()
        .route("/health", get(health_check).with_state(services.health))
        .nest("/api/v1", api)
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        accounting::http::list_deposits,
        accounting::http::list_invoice_tasks,
        accounting::http::list_invoice_history,
        hr::http::list_employees,
        hr::http::create_employee,
        hr::http::update_employee,
        hr::http::delete_employee,
        payroll::http::list_comments,
        payroll::http::list_sites,
        payroll::http::list_tasks,
        payroll::http::list_task_selection,
        payroll::http::list_pselect,
        customers::http::list_sites,
        routing::http::list_tasks,
        routing::http::list_routes
    ),
    components(
        schemas(
            HealthResponse,
            DatabaseHealth,
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
            accounting::models::DepositPage,
            accounting::models::InvoiceTaskPage,
            accounting::models::InvoiceHistoryPage,
            hr::models::EmployeePage,
            hr::models::EmployeeSummary,
            hr::models::MutationResponse,
            hr::CreateEmployeeCommand,
            hr::UpdateEmployeeCommand,
            hr::EmployeeFields,
            payroll::models::CommentPage,
            payroll::models::PayrollSitePage,
            payroll::models::TaskPage,
            payroll::models::TaskChoicePage,
            payroll::models::PSelectPage,
            customers::models::CustomerSitePage,
            routing::models::RoutingTaskPage,
            routing::models::RoutePage,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "accounting", description = "Deposits and invoice lines"),
        (name = "hr", description = "Employees"),
        (name = "payroll", description = "Payroll screens"),
        (name = "customers", description = "Customer sites"),
        (name = "routing", description = "Routing tasks and routes")
    ),
    info(
        title = "Dispatch API",
        description = "Filtered, cached list endpoints over the dispatch back office database",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
