use std::sync::Arc;

use crate::{
    cache::{CacheStore, MemoryCache},
    config::MemoryConfig,
    core::backend::CacheBackend,
};

pub struct CacheProvider;

impl CacheProvider {
    /// Create a Redis-based cache backend from a pool
    pub fn redis_backend(pool: deadpool_redis::Pool) -> Arc<CacheBackend> {
        Arc::new(CacheBackend::from(pool))
    }

    /// Create a memory-based cache backend
    pub fn memory_backend(config: &MemoryConfig) -> Arc<CacheBackend> {
        Arc::new(CacheBackend::Memory(MemoryCache::new(config)))
    }

    /// Erase the concrete backend for handlers that only need the trait.
    pub fn shared(backend: Arc<CacheBackend>) -> Arc<dyn CacheStore> {
        backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_creation() {
        let backend = CacheProvider::memory_backend(&MemoryConfig::default());
        assert!(!backend.is_redis());
        assert_eq!(CacheProvider::shared(backend).backend_name(), "memory");
    }
}
