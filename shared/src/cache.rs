//! Keyed request cache with stale-while-revalidate reads and in-flight
//! request sharing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::num::NonZeroUsize;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::debug;
use lru::LruCache;

use crate::error::FetchError;
use crate::view::query::QueryParams;

/// Identifies one cached response: an endpoint plus its normalized parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub endpoint: String,
    pub params: String,
}

impl QueryKey {
    pub fn new(endpoint: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: params.into(),
        }
    }

    /// Key for an endpoint with no parameters.
    pub fn endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, String::new())
    }

    pub fn from_query(endpoint: impl Into<String>, query: &QueryParams) -> Self {
        Self::new(endpoint, query.to_query_string())
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            f.write_str(&self.endpoint)
        } else {
            write!(f, "{}?{}", self.endpoint, self.params)
        }
    }
}

/// Time source for staleness checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fetch that any number of callers can await; it runs once.
pub type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T, FetchError>>>;

/// Outcome of [`QueryCache::fetch`].
pub enum CacheLookup<T> {
    /// Cached and within the stale-after window.
    Fresh(T),
    /// Cached but old. Show `value` now and drive `refresh` to update the cache.
    Stale { value: T, refresh: SharedFetch<T> },
    /// Nothing cached yet.
    Pending(SharedFetch<T>),
}

impl<T: Clone> CacheLookup<T> {
    /// Value to render immediately, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fresh(value) | Self::Stale { value, .. } => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Resolves to the freshest value this lookup can produce.
    pub async fn resolve(self) -> Result<T, FetchError> {
        match self {
            Self::Fresh(value) => Ok(value),
            Self::Stale { refresh, .. } | Self::Pending(refresh) => refresh.await,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CacheLookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh(value) => f.debug_tuple("Fresh").field(value).finish(),
            Self::Stale { value, .. } => f.debug_struct("Stale").field("value", value).finish(),
            Self::Pending(_) => f.write_str("Pending"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: DateTime<Utc>,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub in_flight: usize,
    pub hits: u64,
    pub stale_hits: u64,
    pub misses: u64,
}

struct InFlight<T> {
    id: u64,
    fetch: SharedFetch<T>,
}

struct Inner<T> {
    entries: LruCache<QueryKey, CacheEntry<T>>,
    in_flight: HashMap<QueryKey, InFlight<T>>,
    next_id: u64,
    hits: u64,
    stale_hits: u64,
    misses: u64,
}

/// Single-threaded response cache. Clones share the same store.
///
/// Successful responses are kept (least recently used first out once
/// `capacity` is reached). Failures are never stored, so the next read of a
/// failed key fetches again. While a fetch for a key is outstanding, every
/// other read of that key joins it instead of starting another request.
pub struct QueryCache<T> {
    inner: Rc<RefCell<Inner<T>>>,
    stale_after: Duration,
    clock: Rc<dyn Clock>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            stale_after: self.stale_after,
            clock: Rc::clone(&self.clock),
        }
    }
}

impl<T: Clone + 'static> QueryCache<T> {
    pub fn new(capacity: NonZeroUsize, stale_after: Duration) -> Self {
        Self::with_clock(capacity, stale_after, Rc::new(SystemClock))
    }

    pub fn with_clock(capacity: NonZeroUsize, stale_after: Duration, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: LruCache::new(capacity),
                in_flight: HashMap::new(),
                next_id: 0,
                hits: 0,
                stale_hits: 0,
                misses: 0,
            })),
            stale_after,
            clock,
        }
    }

    /// Looks up `key`, starting `fetcher` only when nothing usable is cached
    /// or in flight.
    pub fn fetch<F, Fut>(&self, key: &QueryKey, fetcher: F) -> CacheLookup<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let now = self.clock.now();
        let (cached, joined) = {
            let mut inner = self.inner.borrow_mut();
            let cached = inner
                .entries
                .get(key)
                .map(|entry| (entry.value.clone(), now - entry.stored_at > self.stale_after));
            let joined = inner.in_flight.get(key).map(|flight| flight.fetch.clone());
            match (&cached, &joined) {
                (Some((_, false)), _) => inner.hits += 1,
                (Some((_, true)), _) => inner.stale_hits += 1,
                (None, None) => inner.misses += 1,
                (None, Some(_)) => {}
            }
            (cached, joined)
        };

        match cached {
            Some((value, false)) => {
                debug!("Cache hit for {}", key);
                CacheLookup::Fresh(value)
            }
            Some((value, true)) => {
                debug!("Stale cache hit for {}, revalidating", key);
                let refresh = joined.unwrap_or_else(|| self.start(key, fetcher()));
                CacheLookup::Stale { value, refresh }
            }
            None => match joined {
                Some(fetch) => {
                    debug!("Joining in-flight request for {}", key);
                    CacheLookup::Pending(fetch)
                }
                None => {
                    debug!("Cache miss for {}, fetching...", key);
                    CacheLookup::Pending(self.start(key, fetcher()))
                }
            },
        }
    }

    fn start<Fut>(&self, key: &QueryKey, request: Fut) -> SharedFetch<T>
    where
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        let cache = self.clone();
        let owned_key = key.clone();

        let fetch = async move {
            let result = request.await;
            cache.complete(&owned_key, id, &result);
            result
        }
        .boxed_local()
        .shared();

        inner.in_flight.insert(
            key.clone(),
            InFlight {
                id,
                fetch: fetch.clone(),
            },
        );
        fetch
    }

    /// Stores a finished fetch unless the key was invalidated while it ran.
    fn complete(&self, key: &QueryKey, id: u64, result: &Result<T, FetchError>) {
        let mut inner = self.inner.borrow_mut();
        if inner.in_flight.get(key).map(|flight| flight.id) != Some(id) {
            debug!("Discarding superseded response for {}", key);
            return;
        }
        inner.in_flight.remove(key);

        match result {
            Ok(value) => {
                let entry = CacheEntry {
                    value: value.clone(),
                    stored_at: self.clock.now(),
                };
                inner.entries.put(key.clone(), entry);
            }
            Err(err) => debug!("Not caching failed request for {}: {}", key, err),
        }
    }

    /// Cached value regardless of age.
    pub fn get(&self, key: &QueryKey) -> Option<T> {
        self.inner
            .borrow_mut()
            .entries
            .get(key)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: QueryKey, value: T) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };
        self.inner.borrow_mut().entries.put(key, entry);
    }

    /// Drops the cached value and detaches any in-flight fetch for `key`.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut inner = self.inner.borrow_mut();
        inner.entries.pop(key);
        inner.in_flight.remove(key);
    }

    /// Invalidates every key of one endpoint.
    pub fn invalidate_endpoint(&self, endpoint: &str) {
        let mut inner = self.inner.borrow_mut();
        let keys: Vec<QueryKey> = inner
            .entries
            .iter()
            .map(|(key, _)| key)
            .chain(inner.in_flight.keys())
            .filter(|key| key.endpoint == endpoint)
            .cloned()
            .collect();
        for key in keys {
            inner.entries.pop(&key);
            inner.in_flight.remove(&key);
        }
    }

    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.entries.clear();
        inner.in_flight.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.borrow();
        CacheStats {
            entries: inner.entries.len(),
            in_flight: inner.in_flight.len(),
            hits: inner.hits,
            stale_hits: inner.stale_hits,
            misses: inner.misses,
        }
    }
}
