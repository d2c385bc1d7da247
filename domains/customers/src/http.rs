use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use common_errors::AppError;
use dao_utils::PgListDao;
use list_cache::{ListCacheSettings, ListOutcome, ListParams, ListQueryHandler};
use redis_connection::CacheStore;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::models::{CustomerSitePage, Site};

#[derive(Clone)]
pub struct CustomerServices {
    pub sites: ListQueryHandler<Site>,
}

impl CustomerServices {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            sites: ListQueryHandler::new(
                Arc::new(PgListDao::<Site>::new(db)),
                cache,
                settings,
            ),
        }
    }
}

pub fn router() -> Router<CustomerServices> {
    Router::new().route("/sites", get(list_sites).post(list_sites))
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/customers/sites",
    operation_id = "list_customer_sites",
    params(
        ("cust_id" = Option<String>, Query, description = "Substring of the customer id"),
        ("master_id" = Option<String>, Query, description = "Substring of the master account id"),
        ("company" = Option<String>, Query, description = "Substring of the company"),
        ("city" = Option<String>, Query, description = "Substring of the city"),
        ("state" = Option<String>, Query, description = "State, case-insensitive"),
        ("billing_cycle" = Option<i32>, Query, description = "Billing cycle"),
        ("active" = Option<bool>, Query, description = "Active sites only"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Customer sites", body = CustomerSitePage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "customers"
)]
#[instrument(skip_all)]
pub async fn list_sites(
    State(services): State<CustomerServices>, params: ListParams,
) -> Result<ListOutcome<Site>, AppError> {
    Ok(services.sites.execute(&params).await?)
}
