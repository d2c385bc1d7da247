use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use async_trait::async_trait;
use bytes::Bytes;
use moka::{Expiry, future::Cache, notification::RemovalCause};

use super::r#trait::{CacheResult, CacheStore};
use crate::config::MemoryConfig;

#[derive(Clone)]
struct Entry {
    bytes: Bytes,
    ttl: Duration,
    tag: Option<Arc<str>>,
    generation: u64,
}

/// Expires each entry after the TTL it was written with.
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(
        &self, _key: &String, value: &Entry, _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self, _key: &String, value: &Entry, _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// tag -> key -> generation of the entry that registered it.
#[derive(Default)]
struct TagIndex(Mutex<HashMap<String, HashMap<String, u64>>>);

impl TagIndex {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, HashMap<String, u64>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn register(&self, tag: &str, key: &str, generation: u64) {
        self.lock()
            .entry(tag.to_string())
            .or_default()
            .insert(key.to_string(), generation);
    }

    /// Drops `key` only if the index still points at the removed entry.
    fn forget(&self, tag: &str, key: &str, generation: u64) {
        let mut tags = self.lock();
        let Some(keys) = tags.get_mut(tag)
        else {
            return;
        };
        if keys.get(key) == Some(&generation) {
            keys.remove(key);
        }
        if keys.is_empty() {
            tags.remove(tag);
        }
    }

    fn take(&self, tag: &str) -> Vec<String> {
        self.lock()
            .remove(tag)
            .map(|keys| keys.into_keys().collect())
            .unwrap_or_default()
    }

    fn len(&self) -> usize { self.lock().values().map(HashMap::len).sum() }
}

/// In-process cache on top of moka with a side index for tags.
///
/// The index follows the cache: expired, evicted and removed entries are
/// pruned from it by the eviction listener.
#[derive(Clone)]
pub struct MemoryCache {
    cache: Cache<String, Entry>,
    tags: Arc<TagIndex>,
    generation: Arc<AtomicU64>,
}

impl MemoryCache {
    pub fn new(config: &MemoryConfig) -> Self {
        let tags = Arc::new(TagIndex::default());
        let listener_tags = Arc::clone(&tags);

        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .expire_after(EntryTtl)
            .eviction_listener(
                move |key: Arc<String>, entry: Entry, _cause: RemovalCause| {
                    if let Some(tag) = entry.tag {
                        listener_tags.forget(&tag, &key, entry.generation);
                    }
                },
            )
            .build();

        Self {
            cache,
            tags,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of keys currently registered under any tag.
    pub fn tagged_keys(&self) -> usize { self.tags.len() }

    /// Runs moka's pending maintenance (expiry, eviction, notifications).
    pub async fn run_pending_tasks(&self) { self.cache.run_pending_tasks().await }

    pub fn entry_count(&self) -> u64 { self.cache.entry_count() }
}

impl Default for MemoryCache {
    fn default() -> Self { Self::new(&MemoryConfig::default()) }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        Ok(self.cache.get(key).await.map(|entry| entry.bytes))
    }

    async fn set(
        &self, key: &str, value: Bytes, ttl: Duration, tag: Option<&str>,
    ) -> CacheResult<()> {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        let entry = Entry {
            bytes: value,
            ttl,
            tag: tag.map(Arc::from),
            generation,
        };
        // The replaced entry's notification fires during insert, so the
        // new generation is registered after it.
        self.cache.insert(key.to_string(), entry).await;

        if let Some(tag) = tag {
            self.tags.register(tag, key, generation);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn invalidate_tag(&self, tag: &str) -> CacheResult<u64> {
        let keys = self.tags.take(tag);

        let mut removed = 0;
        for key in keys {
            if self.cache.remove(&key).await.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str { "memory" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::default();
        cache
            .set("k", Bytes::from_static(b"[1,2]"), TTL, None)
            .await
            .unwrap();

        let value = cache.get("k").await.unwrap();
        assert_eq!(value.as_deref(), Some(&b"[1,2]"[..]));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let cache = MemoryCache::default();
        cache
            .set("k", Bytes::from_static(b"1"), TTL, None)
            .await
            .unwrap();

        assert!(cache.delete("k").await.unwrap());
        assert!(cache.get("k").await.unwrap().is_none());
        assert!(!cache.delete("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_entry_expires_after_its_ttl() {
        let cache = MemoryCache::default();
        cache
            .set(
                "short",
                Bytes::from_static(b"1"),
                Duration::from_millis(50),
                None,
            )
            .await
            .unwrap();
        cache
            .set("long", Bytes::from_static(b"2"), TTL, None)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(cache.get("short").await.unwrap().is_none());
        assert!(cache.get("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_invalidate_tag_removes_only_tagged_keys() {
        let cache = MemoryCache::default();
        for key in ["emp_all", "emp_id_1", "emp_id_2"] {
            cache
                .set(key, Bytes::from_static(b"[]"), TTL, Some("emp_keys"))
                .await
                .unwrap();
        }
        cache
            .set("sites_all", Bytes::from_static(b"[]"), TTL, Some("site_keys"))
            .await
            .unwrap();

        let removed = cache.invalidate_tag("emp_keys").await.unwrap();

        assert_eq!(removed, 3);
        assert!(cache.get("emp_id_1").await.unwrap().is_none());
        assert!(cache.get("sites_all").await.unwrap().is_some());
        assert_eq!(cache.invalidate_tag("emp_keys").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_tag_index_follows_expired_and_evicted_entries() {
        let cache = MemoryCache::new(&MemoryConfig { capacity: 10 });
        for i in 0..500 {
            cache
                .set(
                    &format!("payroll_comments_v1_comment_{i}"),
                    Bytes::from_static(b"[]"),
                    Duration::from_millis(5),
                    Some("payroll_comments_v1_keys"),
                )
                .await
                .unwrap();
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        cache.run_pending_tasks().await;

        assert_eq!(cache.tagged_keys() as u64, cache.entry_count());
        assert_eq!(cache.tagged_keys(), 0);
    }

    #[tokio::test]
    async fn test_rewritten_key_stays_tagged_after_old_entry_expires() {
        let cache = MemoryCache::default();
        cache
            .set(
                "emp_id_1",
                Bytes::from_static(b"[]"),
                Duration::from_millis(5),
                Some("emp_keys"),
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        cache
            .set("emp_id_1", Bytes::from_static(b"[1]"), TTL, Some("emp_keys"))
            .await
            .unwrap();
        cache.run_pending_tasks().await;

        assert_eq!(cache.tagged_keys(), 1);
        assert_eq!(cache.invalidate_tag("emp_keys").await.unwrap(), 1);
        assert!(cache.get("emp_id_1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_explicit_delete_unregisters_key() {
        let cache = MemoryCache::default();
        cache
            .set("emp_all", Bytes::from_static(b"[]"), TTL, Some("emp_keys"))
            .await
            .unwrap();

        assert!(cache.delete("emp_all").await.unwrap());
        cache.run_pending_tasks().await;

        assert_eq!(cache.tagged_keys(), 0);
    }
}
