use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use database_traits::{ListSource, StoreError, StoreQuery};
use sql_connection::SqlConnect;
use tokio_postgres::Row;
use tracing::{debug, instrument};

use crate::{
    error_handling::CommonDaoError,
    query_helpers::{SelectBuilder, create_param_refs},
};

/// Table mapping for an entity read by `PgListDao`.
pub trait PgEntity: Sized + Send + Sync + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const ORDER_BY: &'static [&'static str];

    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error>;

    fn select_builder() -> SelectBuilder<'static> {
        SelectBuilder::new(Self::TABLE, Self::COLUMNS, Self::ORDER_BY)
    }
}

/// Legacy boolean columns are nullable; NULL reads as false.
pub fn flag(row: &Row, column: &str) -> Result<bool, tokio_postgres::Error> {
    Ok(row.try_get::<_, Option<bool>>(column)?.unwrap_or(false))
}

/// Nullable text column; NULL reads as an empty string.
pub fn text(row: &Row, column: &str) -> Result<String, tokio_postgres::Error> {
    Ok(row.try_get::<_, Option<String>>(column)?.unwrap_or_default())
}

/// `MM/DD/YYYY`, the format the payroll screens expect.
pub fn us_date(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|v| v.format("%m/%d/%Y").to_string())
}

pub struct PgListDao<T> {
    db: SqlConnect,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for PgListDao<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: PgEntity> PgListDao<T> {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    async fn query_rows(
        &self, query: &StoreQuery,
    ) -> Result<Vec<T>, CommonDaoError> {
        let (sql, params) = T::select_builder().build(query);
        debug!(sql = %sql, params = params.len());

        let client = self.db.get_client().await?;
        let stmt = client.prepare(&sql).await?;
        let rows = client.query(&stmt, &create_param_refs(&params)).await?;

        rows.iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CommonDaoError::Decode)
    }
}

#[async_trait]
impl<T: PgEntity> ListSource<T> for PgListDao<T> {
    #[instrument(skip_all, fields(table = T::TABLE, limit = query.limit))]
    async fn fetch(&self, query: &StoreQuery) -> Result<Vec<T>, StoreError> {
        Ok(self.query_rows(query).await?)
    }
}
