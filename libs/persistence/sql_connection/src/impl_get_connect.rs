use deadpool_postgres::{Object, Pool};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct SqlConnect {
    pool: Pool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStatus {
    pub available: usize,
    pub size: usize,
    pub max_size: usize,
}

impl SqlConnect {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn get_client(
        &self,
    ) -> Result<Object, deadpool_postgres::PoolError> {
        self.pool.get().await
    }

    pub fn get_pool_status(&self) -> PoolStatus {
        let status = self.pool.status();
        PoolStatus {
            available: status.available,
            size: status.size,
            max_size: status.max_size,
        }
    }
}
