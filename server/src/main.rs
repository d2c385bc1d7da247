use std::sync::Arc;

use dispatch::{CacheBackendKind, ServerConfig, Services, build_router, cors_layer};
use redis_connection::{
    CacheStore, cache_provider::CacheProvider, connect_redis_db,
};
use sql_connection::{SqlConnect, connect_postgres_db};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    info!("Initializing connection pools...");

    let pool = connect_postgres_db(&config.database).await?;
    let db = SqlConnect::new(pool);
    info!("PostgreSQL connection pool initialized");

    let cache: Arc<dyn CacheStore> = match config.cache_backend {
        CacheBackendKind::Redis => {
            let redis_pool = connect_redis_db(&config.redis).await?;
            info!("Redis cache backend initialized");
            CacheProvider::shared(CacheProvider::redis_backend(redis_pool))
        }
        CacheBackendKind::Memory => {
            info!(
                capacity = config.memory.capacity,
                "In-memory cache backend initialized"
            );
            CacheProvider::shared(CacheProvider::memory_backend(
                &config.memory,
            ))
        }
    };

    info!(
        ttl_secs = config.list_cache.ttl_secs,
        max_records = config.list_cache.max_records,
        "List cache settings"
    );

    let services = Services::new(db, cache, config.list_cache);
    let app =
        build_router(services, cors_layer(&config.cors_allowed_origins));

    info!("Dispatch server starting on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
