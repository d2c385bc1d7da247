use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;
use database_traits::{ListSource, StoreError, StoreQuery};
use redis_connection::{
    CacheError, CacheResult, CacheStore, cache_provider::CacheProvider,
    config::MemoryConfig,
};

/// In-memory backing store that counts calls and records every query.
pub struct FakeSource<T> {
    rows: Mutex<Vec<T>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<StoreQuery>>,
    failing: AtomicBool,
    delay: Option<Duration>,
}

impl<T: Clone + Send + Sync + 'static> FakeSource<T> {
    pub fn new(rows: Vec<T>) -> Arc<Self> {
        Arc::new(Self::build(rows, None))
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(rows: Vec<T>, delay: Duration) -> Arc<Self> {
        Arc::new(Self::build(rows, Some(delay)))
    }

    fn build(rows: Vec<T>, delay: Option<Duration>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            delay,
        }
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    pub fn last_query(&self) -> Option<StoreQuery> {
        self.queries.lock().unwrap().last().cloned()
    }

    pub fn set_rows(&self, rows: Vec<T>) { *self.rows.lock().unwrap() = rows; }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> ListSource<T> for FakeSource<T> {
    async fn fetch(&self, query: &StoreQuery) -> Result<Vec<T>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("fake outage".into()));
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().take(query.limit).cloned().collect())
    }
}

/// Backing store that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSource;

#[async_trait]
impl<T: Send + 'static> ListSource<T> for FailingSource {
    async fn fetch(&self, _query: &StoreQuery) -> Result<Vec<T>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// Cache backend whose every operation errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Bytes>> {
        Err(CacheError::Backend("cache down".into()))
    }

    async fn set(
        &self, _key: &str, _value: Bytes, _ttl: Duration, _tag: Option<&str>,
    ) -> CacheResult<()> {
        Err(CacheError::Backend("cache down".into()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<bool> {
        Err(CacheError::Backend("cache down".into()))
    }

    async fn invalidate_tag(&self, _tag: &str) -> CacheResult<u64> {
        Err(CacheError::Backend("cache down".into()))
    }

    fn backend_name(&self) -> &'static str { "failing" }
}

/// Fresh, empty in-process cache.
pub fn memory_cache() -> Arc<dyn CacheStore> {
    CacheProvider::shared(CacheProvider::memory_backend(
        &MemoryConfig::default(),
    ))
}
