use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use common_errors::AppError;
use dao_utils::PgListDao;
use list_cache::{ListCacheSettings, ListOutcome, ListParams, ListQueryHandler};
use redis_connection::CacheStore;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::models::{
    Deposit, DepositPage, InvoiceHistoryPage, InvoiceHistoryTask, InvoiceTask,
    InvoiceTaskPage,
};

#[derive(Clone)]
pub struct AccountingServices {
    pub deposits: ListQueryHandler<Deposit>,
    pub invoice_tasks: ListQueryHandler<InvoiceTask>,
    pub invoice_history: ListQueryHandler<InvoiceHistoryTask>,
}

impl AccountingServices {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            deposits: ListQueryHandler::new(
                Arc::new(PgListDao::<Deposit>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            invoice_tasks: ListQueryHandler::new(
                Arc::new(PgListDao::<InvoiceTask>::new(db.clone())),
                cache.clone(),
                settings,
            ),
            invoice_history: ListQueryHandler::new(
                Arc::new(PgListDao::<InvoiceHistoryTask>::new(db)),
                cache,
                settings,
            ),
        }
    }
}

pub fn router() -> Router<AccountingServices> {
    Router::new()
        .route("/deposits", get(list_deposits).post(list_deposits))
        .route(
            "/invoice_tasks",
            get(list_invoice_tasks).post(list_invoice_tasks),
        )
        .route(
            "/invoice_history",
            get(list_invoice_history).post(list_invoice_history),
        )
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/accounting/deposits",
    params(
        ("emp_id" = Option<i32>, Query, description = "Employee id"),
        ("deposit_id" = Option<i32>, Query, description = "Deposit id"),
        ("description" = Option<String>, Query, description = "Substring of the description"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Deposits", body = DepositPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "accounting"
)]
#[instrument(skip_all)]
pub async fn list_deposits(
    State(services): State<AccountingServices>, params: ListParams,
) -> Result<ListOutcome<Deposit>, AppError> {
    Ok(services.deposits.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/accounting/invoice_tasks",
    params(
        ("uid" = Option<i32>, Query, description = "Invoice line id"),
        ("task_id" = Option<i32>, Query, description = "Routing task id"),
        ("cust_id" = Option<String>, Query, description = "Customer id"),
        ("master_id" = Option<String>, Query, description = "Master account id"),
        ("invoice_number" = Option<String>, Query, description = "Invoice number"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Open monthly invoice lines", body = InvoiceTaskPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "accounting"
)]
#[instrument(skip_all)]
pub async fn list_invoice_tasks(
    State(services): State<AccountingServices>, params: ListParams,
) -> Result<ListOutcome<InvoiceTask>, AppError> {
    Ok(services.invoice_tasks.execute(&params).await?)
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/accounting/invoice_history",
    params(
        ("uid" = Option<i32>, Query, description = "Invoice line id"),
        ("emp_id" = Option<i32>, Query, description = "Employee id"),
        ("cust_id" = Option<String>, Query, description = "Customer id"),
        ("week_of" = Option<String>, Query, description = "Week, YYYY-MM-DD or MM/DD/YYYY"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Invoice history lines", body = InvoiceHistoryPage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "accounting"
)]
#[instrument(skip_all)]
pub async fn list_invoice_history(
    State(services): State<AccountingServices>, params: ListParams,
) -> Result<ListOutcome<InvoiceHistoryTask>, AppError> {
    Ok(services.invoice_history.execute(&params).await?)
}
