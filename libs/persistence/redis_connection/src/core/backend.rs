use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::cache::{CacheResult, CacheStore, MemoryCache, RedisCache};

/// The cache backend selected at startup.
#[derive(Clone)]
pub enum CacheBackend {
    Redis(RedisCache),
    Memory(MemoryCache),
}

impl CacheBackend {
    pub fn is_redis(&self) -> bool { matches!(self, Self::Redis(_)) }
}

impl From<deadpool_redis::Pool> for CacheBackend {
    fn from(pool: deadpool_redis::Pool) -> Self {
        CacheBackend::Redis(RedisCache::new(pool))
    }
}

impl From<MemoryCache> for CacheBackend {
    fn from(cache: MemoryCache) -> Self { CacheBackend::Memory(cache) }
}

#[async_trait]
impl CacheStore for CacheBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        match self {
            Self::Redis(cache) => cache.get(key).await,
            Self::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(
        &self, key: &str, value: Bytes, ttl: Duration, tag: Option<&str>,
    ) -> CacheResult<()> {
        match self {
            Self::Redis(cache) => cache.set(key, value, ttl, tag).await,
            Self::Memory(cache) => cache.set(key, value, ttl, tag).await,
        }
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        match self {
            Self::Redis(cache) => cache.delete(key).await,
            Self::Memory(cache) => cache.delete(key).await,
        }
    }

    async fn invalidate_tag(&self, tag: &str) -> CacheResult<u64> {
        match self {
            Self::Redis(cache) => cache.invalidate_tag(tag).await,
            Self::Memory(cache) => cache.invalidate_tag(tag).await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Redis(cache) => cache.backend_name(),
            Self::Memory(cache) => cache.backend_name(),
        }
    }
}
