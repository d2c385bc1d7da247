use database_traits::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommonDaoError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),
    #[error("Connection error: {0}")]
    Connection(#[from] deadpool_postgres::PoolError),
    #[error("Row decode error: {0}")]
    Decode(tokio_postgres::Error),
    #[error("Record not found")]
    NotFound,
}

impl From<CommonDaoError> for StoreError {
    fn from(err: CommonDaoError) -> Self {
        match err {
            CommonDaoError::Connection(e) => Self::Unavailable(e.to_string()),
            CommonDaoError::Decode(e) => Self::Decode(e.to_string()),
            CommonDaoError::Database(e) => Self::Query(e.to_string()),
            CommonDaoError::NotFound => Self::Query("record not found".into()),
        }
    }
}
