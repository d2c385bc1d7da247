use common_errors::AppError;
use thiserror::Error;

/// Request input that could not be turned into a Query Spec.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ParamError {
    pub fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::InvalidJson(details) => AppError::invalid_json(&details),
            ParamError::InvalidQuery(details) => {
                AppError::bad_request_with_details(
                    "INVALID_QUERY_PARAMS",
                    "Invalid query parameters provided",
                    &details,
                )
            }
            ParamError::InvalidValue { field, reason } => {
                AppError::invalid_parameter(&field, &reason)
            }
        }
    }
}
