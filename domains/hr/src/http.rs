use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use common_errors::AppError;
use dao_utils::PgListDao;
use list_cache::{ListCacheSettings, ListOutcome, ListParams, ListQueryHandler};
use redis_connection::CacheStore;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::{
    commands::{
        CreateEmployeeCommand, DeleteEmployeeCommand, UpdateEmployeeCommand,
    },
    dao::{EmployeeDao, EmployeeStore},
    handlers::{
        CreateEmployeeHandler, DeleteEmployeeHandler, UpdateEmployeeHandler,
    },
    models::{Employee, EmployeePage, MutationResponse},
};

#[derive(Clone)]
pub struct HrServices {
    pub employees: ListQueryHandler<Employee>,
    pub create_employee: CreateEmployeeHandler,
    pub update_employee: UpdateEmployeeHandler,
    pub delete_employee: DeleteEmployeeHandler,
}

impl HrServices {
    pub fn new(
        db: SqlConnect, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        let employees = ListQueryHandler::new(
            Arc::new(PgListDao::<Employee>::new(db.clone())),
            cache,
            settings,
        );
        Self::with_store(employees, Arc::new(EmployeeDao::new(db)))
    }

    /// Wires the write handlers around an existing list handler.
    pub fn with_store(
        employees: ListQueryHandler<Employee>, store: Arc<dyn EmployeeStore>,
    ) -> Self {
        Self {
            create_employee: CreateEmployeeHandler::new(
                store.clone(),
                employees.clone(),
            ),
            update_employee: UpdateEmployeeHandler::new(
                store.clone(),
                employees.clone(),
            ),
            delete_employee: DeleteEmployeeHandler::new(
                store,
                employees.clone(),
            ),
            employees,
        }
    }
}

pub fn router() -> Router<HrServices> {
    Router::new()
        .route("/employees", get(list_employees).post(list_employees))
        .route("/employees/create", post(create_employee))
        .route(
            "/employees/{id}",
            put(update_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_json(&rejection.body_text()))
}

#[utoipa::path(
    method(get, post),
    path = "/api/v1/hr/employees",
    params(
        ("id" = Option<i32>, Query, description = "Employee id, also accepted as emp_id"),
        ("name" = Option<String>, Query, description = "Substring of the name"),
        ("company" = Option<String>, Query, description = "Substring of the company"),
        ("state" = Option<String>, Query, description = "State, case-insensitive"),
        ("employed" = Option<bool>, Query, description = "Currently employed"),
        ("start_date" = Option<String>, Query, description = "Start date, YYYY-MM-DD or MM/DD/YYYY"),
        ("q" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Employees", body = EmployeePage),
        (status = 400, description = "Invalid parameter", body = common_errors::ApiErrorResponse)
    ),
    tag = "hr"
)]
#[instrument(skip_all)]
pub async fn list_employees(
    State(services): State<HrServices>, params: ListParams,
) -> Result<ListOutcome<Employee>, AppError> {
    Ok(services.employees.execute(&params).await?)
}

#[utoipa::path(
    post,
    path = "/api/v1/hr/employees/create",
    request_body = CreateEmployeeCommand,
    responses(
        (status = 201, description = "Employee created", body = MutationResponse),
        (status = 400, description = "Missing id or name", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Employee id already exists", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "hr"
)]
#[instrument(skip_all)]
pub async fn create_employee(
    State(services): State<HrServices>,
    body: Result<Json<CreateEmployeeCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let command = json_body(body)?;
    let result = services.create_employee.execute(command).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    method(put, patch),
    path = "/api/v1/hr/employees/{id}",
    request_body = UpdateEmployeeCommand,
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee updated", body = MutationResponse),
        (status = 400, description = "Invalid request data", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Employee not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "hr"
)]
#[instrument(skip_all)]
pub async fn update_employee(
    State(services): State<HrServices>, Path(id): Path<i32>,
    body: Result<Json<UpdateEmployeeCommand>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut command = json_body(body)?;
    command.id = id;
    let result = services.update_employee.execute(command).await?;

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/v1/hr/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MutationResponse),
        (status = 404, description = "Employee not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "hr"
)]
#[instrument(skip_all)]
pub async fn delete_employee(
    State(services): State<HrServices>, Path(id): Path<i32>,
) -> Result<Json<MutationResponse>, AppError> {
    let result = services
        .delete_employee
        .execute(DeleteEmployeeCommand { id })
        .await?;

    Ok(Json(result))
}
