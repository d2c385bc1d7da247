use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::query::StoreQuery;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),
    #[error("Query failed: {0}")]
    Query(String),
    #[error("Row decode failed: {0}")]
    Decode(String),
}

/// Read side of the backing store for one entity type.
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    async fn fetch(&self, query: &StoreQuery) -> Result<Vec<T>, StoreError>;
}

#[async_trait]
impl<T, S> ListSource<T> for Arc<S>
where
    S: ListSource<T> + ?Sized,
    T: Send + 'static,
{
    async fn fetch(&self, query: &StoreQuery) -> Result<Vec<T>, StoreError> {
        (**self).fetch(query).await
    }
}
