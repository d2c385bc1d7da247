pub mod memory;
pub mod redis_cache;
pub mod r#trait;

// Re-export the cache types
pub use memory::MemoryCache;
pub use redis_cache::RedisCache;
pub use r#trait::{CacheError, CacheResult, CacheStore};
