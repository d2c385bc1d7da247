pub use config::{DbConnectConfig, DbOptionsConfig, PostgresDbConfig};
pub use deadpool_postgres::PoolError;
pub use impl_get_connect::{PoolStatus, SqlConnect};
pub use tokio_postgres::Error as PgError;

pub mod config;
mod impl_get_connect;
mod static_vars;

pub use static_vars::{build_pool, connect_postgres_db};
