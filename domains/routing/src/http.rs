use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use common_errors::AppError;
use dao_utils::PgListDao;
use list_cache::{ListCacheSettings, ListOutcome, ListParams, ListQueryHandler};
use redis_connection::CacheStore;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::models::{Route, RoutePage, RoutingTask, RoutingTaskPage};

#[derive(Clone)]
pub struct RoutingServices {
    pub tasks: ListQueryHandler<RoutingTask>,
    pub routes: ListQueryHandler<Route>,
}

impl RoutingServices {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            tasks: ListQueryHandler::new(
                Arc::new(PgListDao::<RoutingTask>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            routes: ListQueryHandler::new(
                Arc::new(PgListDao::<Route>::new(db)),
                cache,
                settings,
            ),
        }
    }
}

pub fn router() -> Router<RoutingServices> {
    Router::new()
        .route("/tasks", get(list_tasks).post(list_tasks))
        .route("/routes", get(list_routes).post(list_routes))
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/routing/tasks",
    operation_id = "list_routing_tasks",
    params(
        ("id" = Option<i32>, Query, description = "Task id"),
        ("cust_id" = Option<String>, Query, description = "Customer id"),
        ("master_id" = Option<String>, Query, description = "Master account id"),
        ("selected" = Option<bool>, Query, description = "Selected for routing"),
        ("next_due" = Option<String>, Query, description = "Next due date, YYYY-MM-DD or MM/DD/YYYY"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Routing tasks", body = RoutingTaskPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "routing"
)]
#[instrument(skip_all)]
pub async fn list_tasks(
    State(services): State<RoutingServices>, params: ListParams,
) -> Result<ListOutcome<RoutingTask>, AppError> {
    Ok(services.tasks.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/routing/routes",
    params(
        ("id" = Option<i32>, Query, description = "Route id"),
        ("route" = Option<String>, Query, description = "Route code, case-insensitive"),
        ("description" = Option<String>, Query, description = "Substring of the description"),
        ("active" = Option<bool>, Query, description = "Active routes only"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Routes", body = RoutePage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "routing"
)]
#[instrument(skip_all)]
pub async fn list_routes(
    State(services): State<RoutingServices>, params: ListParams,
) -> Result<ListOutcome<Route>, AppError> {
    Ok(services.routes.execute(&params).await?)
}
