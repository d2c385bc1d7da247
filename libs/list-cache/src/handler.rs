use std::{sync::Arc, time::Duration};

use database_traits::{ListSource, Search, StoreQuery};
use redis_connection::{CacheStore, CacheValue, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    control::CacheControl,
    entity::ListEntity,
    error::ParamError,
    keys::{CacheKey, KeyPlan},
    params::ListParams,
    spec::QuerySpec,
};

pub const DEFAULT_TTL_SECS: u64 = 600;
pub const DEFAULT_MAX_RECORDS: usize = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

fn default_ttl_secs() -> u64 { DEFAULT_TTL_SECS }

fn default_max_records() -> usize { DEFAULT_MAX_RECORDS }

impl Default for ListCacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

impl ListCacheSettings {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    /// The request was not eligible for caching.
    Bypass,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Bypass => "bypass",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub rows: Vec<T>,
    pub status: CacheStatus,
    /// The backing store failed and `rows` is an empty stand-in.
    pub degraded: bool,
}

impl<T> Resolved<T> {
    pub fn served_from_cache(&self) -> bool { self.status == CacheStatus::Hit }
}

/// Rows ready to be written as a list envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome<T> {
    pub rows: Vec<T>,
    pub count_only: bool,
    pub status: CacheStatus,
}

impl<T> ListOutcome<T> {
    pub fn count(&self) -> usize { self.rows.len() }
}

/// Read-through cache in front of one entity's backing store.
pub struct ListQueryHandler<T> {
    source: Arc<dyn ListSource<T>>,
    cache: Arc<dyn CacheStore>,
    settings: ListCacheSettings,
}

impl<T> Clone for ListQueryHandler<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cache: self.cache.clone(),
            settings: self.settings,
        }
    }
}

impl<T: ListEntity> ListQueryHandler<T> {
    pub fn new(
        source: Arc<dyn ListSource<T>>, cache: Arc<dyn CacheStore>,
        settings: ListCacheSettings,
    ) -> Self {
        Self {
            source,
            cache,
            settings,
        }
    }

    pub fn settings(&self) -> ListCacheSettings { self.settings }

    /// Full request path: coercion, freshness directives, resolution and
    /// the caller's `limit`.
    #[instrument(skip_all, fields(entity = T::PLURAL))]
    pub async fn execute(
        &self, params: &ListParams,
    ) -> Result<ListOutcome<T>, ParamError> {
        let spec = QuerySpec::from_params(T::FIELDS, params)?;
        let control = CacheControl::from_params(params)?;

        if T::REQUIRES_FILTER && !spec.has_filters() {
            debug!("no filter supplied, answering with an empty page");
            return Ok(ListOutcome {
                rows: Vec::new(),
                count_only: spec.count_only,
                status: CacheStatus::Bypass,
            });
        }

        let Resolved {
            mut rows, status, ..
        } = self.resolve(&spec, control).await;
        if let Some(limit) = spec.limit {
            rows.truncate(limit);
        }

        Ok(ListOutcome {
            rows,
            count_only: spec.count_only,
            status,
        })
    }

    #[instrument(skip_all, fields(entity = T::PLURAL))]
    pub async fn resolve(
        &self, spec: &QuerySpec, control: CacheControl,
    ) -> Resolved<T> {
        let derived = T::KEYS
            .and_then(|plan| plan.derive(spec).map(|key| (plan, key)));
        let Some((plan, key)) = derived else {
            debug!("request not cacheable, querying store");
            let (rows, degraded) =
                self.fetch(spec, self.capped(spec.limit)).await;
            return Resolved {
                rows,
                status: CacheStatus::Bypass,
                degraded,
            };
        };

        if control.force_refresh {
            debug!(%key, "refresh requested, skipping cache read");
        } else if let Some(rows) = self.read(&key).await {
            debug!(%key, "list cache hit");
            let rows = match &spec.term {
                Some(term) => rows
                    .into_iter()
                    .filter(|row| term.matches(row.search_text()))
                    .collect(),
                None => rows,
            };
            return Resolved {
                rows,
                status: CacheStatus::Hit,
                degraded: false,
            };
        } else {
            debug!(%key, "list cache miss");
        }

        // A searched request narrows in the store and leaves the page alone.
        let simple = spec.term.is_none();
        let limit = if simple {
            self.settings.max_records
        } else {
            self.capped(spec.limit)
        };

        let (rows, degraded) = self.fetch(spec, limit).await;
        if simple && !degraded {
            self.write(&plan, &key, &rows).await;
        }

        Resolved {
            rows,
            status: CacheStatus::Miss,
            degraded,
        }
    }

    /// Drops every cached page of the entity. Returns the number of keys
    /// removed.
    #[instrument(skip_all, fields(entity = T::PLURAL))]
    pub async fn invalidate(&self) -> u64 {
        let Some(plan) = T::KEYS else {
            return 0;
        };
        let tag = plan.tag();
        match self.cache.invalidate_tag(&tag).await {
            Ok(removed) => {
                info!(%tag, removed, "list cache invalidated");
                removed
            }
            Err(e) => {
                warn!(%tag, error = %e, "list cache invalidation failed");
                0
            }
        }
    }

    fn capped(&self, limit: Option<usize>) -> usize {
        limit.map_or(self.settings.max_records, |l| {
            l.min(self.settings.max_records)
        })
    }

    async fn fetch(&self, spec: &QuerySpec, limit: usize) -> (Vec<T>, bool) {
        let search = spec.term.as_ref().map(|term| Search {
            columns: T::SEARCH,
            term: term.as_str().to_string(),
        });
        let query = StoreQuery::new(limit)
            .with_filters(spec.filters.clone())
            .with_search(search);

        match self.source.fetch(&query).await {
            Ok(rows) => (rows, false),
            Err(e) => {
                warn!(error = %e, "backing store failed, serving empty page");
                (Vec::new(), true)
            }
        }
    }

    async fn read(&self, key: &CacheKey) -> Option<Vec<T>> {
        let bytes = match self.cache.get(key.as_str()).await {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!(%key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };
        match Json::<Vec<T>>::from_bytes(&bytes) {
            Ok(page) => Some(page.inner()),
            Err(e) => {
                warn!(%key, error = %e, "cached page unreadable, treating as miss");
                None
            }
        }
    }

    async fn write(&self, plan: &KeyPlan, key: &CacheKey, rows: &[T]) {
        let bytes = match Json(rows).encode() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%key, error = %e, "page could not be encoded");
                return;
            }
        };
        let tag = plan.tag();
        if let Err(e) = self
            .cache
            .set(key.as_str(), bytes, self.settings.ttl(), Some(&tag))
            .await
        {
            warn!(%key, error = %e, "cache write failed");
        }
    }
}
