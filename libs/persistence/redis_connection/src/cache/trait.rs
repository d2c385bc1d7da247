use std::time::Duration;

use bytes::Bytes;

/// Cache-specific error type that doesn't depend on Redis
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self { Self::Backend(err.to_string()) }
}

impl From<deadpool_redis::PoolError> for CacheError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        Self::Backend(err.to_string())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Flat, string-keyed byte store with per-entry TTL and tag groups.
///
/// A key written with a tag is remembered under that tag so that
/// `invalidate_tag` can drop every key of the group in one call.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>>;

    async fn set(
        &self, key: &str, value: Bytes, ttl: Duration, tag: Option<&str>,
    ) -> CacheResult<()>;

    /// Returns whether the key was present.
    async fn delete(&self, key: &str) -> CacheResult<bool>;

    /// Removes every key registered under `tag`, then the tag itself.
    async fn invalidate_tag(&self, tag: &str) -> CacheResult<u64>;

    fn backend_name(&self) -> &'static str;
}
