use deadpool_redis::{Config, Pool, Runtime};
pub use deadpool_redis::PoolError;
pub use redis::RedisError;
use tracing::{info, instrument};
use url::Url;

pub mod cache;
pub mod cache_provider;
pub mod config;
pub mod core;

pub use cache::{CacheError, CacheResult, CacheStore, MemoryCache, RedisCache};
pub use crate::core::{CacheBackend, CacheValue, Json};

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid redis url: {0}")]
    Url(String),
    #[error("Failed to create redis pool: {0}")]
    Pool(#[from] deadpool_redis::CreatePoolError),
}

pub fn redis_url<C>(config: &C) -> Result<Url, ConnectError>
where
    C: config::DbConnectConfig,
{
    let mut url =
        Url::parse("redis://").map_err(|e| ConnectError::Url(e.to_string()))?;

    url.set_host(Some(config.host()))
        .map_err(|e| ConnectError::Url(e.to_string()))?;
    url.set_port(Some(config.port()))
        .map_err(|()| ConnectError::Url("cannot set port".into()))?;
    if let Some(password) = config.password() {
        url.set_password(Some(password))
            .map_err(|()| ConnectError::Url("cannot set password".into()))?;
    }
    url.set_path(&config.db().to_string());

    Ok(url)
}

#[instrument(skip_all, name = "connect-redis")]
pub async fn connect_redis_db<C>(config: &C) -> Result<Pool, ConnectError>
where
    C: config::DbConnectConfig,
{
    let url = redis_url(config)?;

    info!(
        redis.host = config.host(),
        redis.port = config.port(),
        redis.db = config.db(),
        redis.connect = true
    );

    let cfg = Config {
        url: Some(url.to_string()),
        pool: Some(deadpool_redis::PoolConfig::default()),
        connection: None,
    };

    let pool = cfg.create_pool(Some(Runtime::Tokio1))?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RedisDbConfig;

    #[test]
    fn test_url_construction() {
        let config = RedisDbConfig {
            host: "localhost".to_string(),
            port: 6379,
            db: 2,
            password: None,
        };

        let url = redis_url(&config).unwrap();
        assert_eq!(url.to_string(), "redis://localhost:6379/2");
    }

    #[test]
    fn test_url_carries_password() {
        let config = RedisDbConfig {
            password: Some("s3cret".into()),
            ..RedisDbConfig::default()
        };

        let url = redis_url(&config).unwrap();
        assert_eq!(url.to_string(), "redis://:s3cret@127.0.0.1:6379/0");
    }

    #[test]
    fn test_redis_db_config_default() {
        let config: RedisDbConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 6379);
        assert_eq!(config.db, 0);
        assert!(config.password.is_none());
    }
}
