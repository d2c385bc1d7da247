use common_errors::AppError;
use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee not found: {id}")]
    NotFound { id: i32 },
    #[error("Employee already exists: {id}")]
    Duplicate { id: i32 },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
}

impl From<HrError> for AppError {
    fn from(err: HrError) -> Self {
        match err {
            HrError::NotFound { id } => {
                AppError::not_found(
                    "EMPLOYEE_NOT_FOUND",
                    &format!("Employee with ID {id} not found"),
                )
            }
            HrError::Duplicate { id } => {
                AppError::unprocessable_entity(
                    "EMPLOYEE_EXISTS",
                    &format!("An employee with ID {id} already exists"),
                )
            }
            HrError::Validation(msg) => {
                AppError::bad_request("VALIDATION_ERROR", &msg)
            }
            HrError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            HrError::DatabasePool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
        }
    }
}
