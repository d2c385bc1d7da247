use std::time::Duration;

use anyhow::{Context, Result};
use sql_connection::{PostgresDbConfig, SqlConnect, build_pool};
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner},
};

/// Throwaway PostgreSQL instance for DAO integration tests.
pub struct TestPostgresContainer {
    pub db: SqlConnect,
    pub connection_string: String,
    // Keep the container alive for the lifetime of this struct
    _container: ContainerAsync<Postgres>,
}

impl TestPostgresContainer {
    pub async fn new() -> Result<Self> {
        let container = Postgres::default()
            .with_env_var("POSTGRES_DB", "dispatch")
            .with_env_var("POSTGRES_USER", "testuser")
            .with_env_var("POSTGRES_PASSWORD", "testpass")
            .start()
            .await
            .context("Failed to start PostgreSQL container")?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;
        let connection_string = format!(
            "postgresql://testuser:testpass@{host}:{port}/dispatch"
        );

        let config = PostgresDbConfig {
            uri: connection_string.clone(),
            max_conn: Some(4),
            min_conn: None,
            wait_timeout_ms: 5000,
        };
        let db = SqlConnect::new(build_pool(&config)?);
        Self::wait_until_ready(&db).await?;

        Ok(Self {
            db,
            connection_string,
            _container: container,
        })
    }

    async fn wait_until_ready(db: &SqlConnect) -> Result<()> {
        const MAX_ATTEMPTS: u32 = 20;

        for attempt in 1..=MAX_ATTEMPTS {
            let ready = match db.get_client().await {
                Ok(client) => client.query_one("SELECT 1", &[]).await.is_ok(),
                Err(_) => false,
            };
            if ready {
                return Ok(());
            }
            if attempt < MAX_ATTEMPTS {
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }

        anyhow::bail!("PostgreSQL not ready after {MAX_ATTEMPTS} attempts")
    }

    /// Runs a batch of statements, e.g. a legacy table fixture.
    pub async fn execute_sql(&self, sql: &str) -> Result<()> {
        let client = self.db.get_client().await?;
        client
            .batch_execute(sql)
            .await
            .context("Failed to execute SQL")?;
        Ok(())
    }
}
