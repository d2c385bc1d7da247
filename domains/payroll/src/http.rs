use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use common_errors::AppError;
use dao_utils::PgListDao;
use list_cache::{ListCacheSettings, ListOutcome, ListParams, ListQueryHandler};
use redis_connection::CacheStore;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::models::{
    CommentPage, PSelect, PSelectPage, PayrollComment, PayrollSite,
    PayrollSitePage, PayrollTask, TaskChoice, TaskChoicePage, TaskPage,
};

#[derive(Clone)]
pub struct PayrollServices {
    pub comments: ListQueryHandler<PayrollComment>,
    pub sites: ListQueryHandler<PayrollSite>,
    pub tasks: ListQueryHandler<PayrollTask>,
    pub task_selection: ListQueryHandler<TaskChoice>,
    pub pselect: ListQueryHandler<PSelect>,
}

impl PayrollServices {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            comments: ListQueryHandler::new(
                Arc::new(PgListDao::<PayrollComment>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            sites: ListQueryHandler::new(
                Arc::new(PgListDao::<PayrollSite>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            tasks: ListQueryHandler::new(
                Arc::new(PgListDao::<PayrollTask>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            task_selection: ListQueryHandler::new(
                Arc::new(PgListDao::<TaskChoice>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            pselect: ListQueryHandler::new(
                Arc::new(PgListDao::<PSelect>::new(db)),
                cache,
                settings,
            ),
        }
    }
}

pub fn router() -> Router<PayrollServices> {
    Router::new()
        .route("/comments", get(list_comments).post(list_comments))
        .route("/sites", get(list_sites).post(list_sites))
        .route("/tasks", get(list_tasks).post(list_tasks))
        .route(
            "/task_selection",
            get(list_task_selection).post(list_task_selection),
        )
        .route("/pselect", get(list_pselect).post(list_pselect))
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/payroll/comments",
    params(
        ("comment" = Option<String>, Query, description = "Substring of the comment"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Payroll comments", body = CommentPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "payroll"
)]
#[instrument(skip_all)]
pub async fn list_comments(
    State(services): State<PayrollServices>, params: ListParams,
) -> Result<ListOutcome<PayrollComment>, AppError> {
    Ok(services.comments.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/payroll/sites",
    operation_id = "list_payroll_sites",
    params(
        ("cust_id" = Option<String>, Query, description = "Customer id"),
        ("company" = Option<String>, Query, description = "Substring of the company"),
        ("in_monthly" = Option<bool>, Query, description = "On the monthly invoice"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Payroll sites", body = PayrollSitePage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "payroll"
)]
#[instrument(skip_all)]
pub async fn list_sites(
    State(services): State<PayrollServices>, params: ListParams,
) -> Result<ListOutcome<PayrollSite>, AppError> {
    Ok(services.sites.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/payroll/tasks",
    operation_id = "list_payroll_tasks",
    params(
        ("cust_id" = Option<String>, Query, description = "Customer id, case-insensitive"),
        ("route" = Option<String>, Query, description = "Route, case-insensitive"),
        ("week_of" = Option<String>, Query, description = "Week, YYYY-MM-DD or MM/DD/YYYY"),
        ("emp_id" = Option<i32>, Query, description = "Employee id"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Payroll task lines", body = TaskPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "payroll"
)]
#[instrument(skip_all)]
pub async fn list_tasks(
    State(services): State<PayrollServices>, params: ListParams,
) -> Result<ListOutcome<PayrollTask>, AppError> {
    Ok(services.tasks.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/payroll/task_selection",
    params(
        ("cust_id" = Option<String>, Query, description = "Customer id, case-insensitive"),
        ("q" = Option<String>, Query, description = "Substring of the description")
    ),
    responses(
        (status = 200, description = "Routing tasks for the insert-entry picker", body = TaskChoicePage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "payroll"
)]
#[instrument(skip_all)]
pub async fn list_task_selection(
    State(services): State<PayrollServices>, params: ListParams,
) -> Result<ListOutcome<TaskChoice>, AppError> {
    Ok(services.task_selection.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/payroll/pselect",
    params(
        ("psid" = i32, Query, description = "Selection id, also accepted as uid")
    ),
    responses(
        (status = 200, description = "Payroll selection; empty without psid", body = PSelectPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "payroll"
)]
#[instrument(skip_all)]
pub async fn list_pselect(
    State(services): State<PayrollServices>, params: ListParams,
) -> Result<ListOutcome<PSelect>, AppError> {
    Ok(services.pselect.execute(&params).await?)
}
