use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bytes::Bytes;
use redis::AsyncCommands;
use tracing::debug;

use super::r#trait::{CacheResult, CacheStore};

/// Redis cache implementation using deadpool Redis pool.
///
/// Tags are sorted sets of member keys scored by their expiry (unix
/// seconds). Every tagged write trims members that have already expired.
#[derive(Clone)]
pub struct RedisCache {
    pool: deadpool_redis::Pool,
}

impl RedisCache {
    pub fn new(pool: deadpool_redis::Pool) -> Self { Self { pool } }
}

fn ttl_secs(ttl: Duration) -> u64 { ttl.as_secs().max(1) }

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Commands for one write: the value itself, plus the tag bookkeeping.
fn write_pipeline(
    key: &str, value: &[u8], secs: u64, tag: Option<&str>, now: u64,
) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic().set_ex(key, value, secs).ignore();
    if let Some(tag) = tag {
        pipe.zadd(tag, key, now + secs)
            .ignore()
            .zrembyscore(tag, "-inf", now)
            .ignore()
            .expire(tag, secs as i64)
            .ignore();
    }
    pipe
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        let mut conn = self.pool.get().await?;
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value.map(Bytes::from))
    }

    async fn set(
        &self, key: &str, value: Bytes, ttl: Duration, tag: Option<&str>,
    ) -> CacheResult<()> {
        let secs = ttl_secs(ttl);
        let mut conn = self.pool.get().await?;

        write_pipeline(key, value.as_ref(), secs, tag, unix_now())
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.pool.get().await?;
        let count: u64 = conn.del(key).await?;
        Ok(count > 0)
    }

    async fn invalidate_tag(&self, tag: &str) -> CacheResult<u64> {
        let mut conn = self.pool.get().await?;
        let keys: Vec<String> = conn.zrange(tag, 0, -1).await?;

        let removed: u64 = if keys.is_empty() {
            0
        }
        else {
            conn.del(keys.as_slice()).await?
        };
        let _: u64 = conn.del(tag).await?;

        debug!(cache.tag = tag, cache.removed = removed, "tag invalidated");
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str { "redis" }
}
