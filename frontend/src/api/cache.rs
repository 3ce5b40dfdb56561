use std::num::NonZeroUsize;
use std::rc::Rc;

use log::debug;
use shared::cache::{CacheLookup, CacheStats, QueryCache, QueryKey, SharedFetch};
use wasm_bindgen_futures::spawn_local;

use crate::api::client;
use crate::config::Config;

thread_local! {
    /// Response bodies keyed by endpoint and query. Bodies are decoded by the
    /// reader, so one store serves every response type.
    static REQUEST_CACHE: QueryCache<Rc<String>> = QueryCache::new(
        NonZeroUsize::new(Config::CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        Config::cache_stale_after(),
    );
}

pub fn request_cache() -> QueryCache<Rc<String>> {
    REQUEST_CACHE.with(Clone::clone)
}

/// Cached GET of `key`, fetching (with retries) only on a miss or a stale hit.
pub fn cached_get(key: &QueryKey) -> CacheLookup<Rc<String>> {
    let path = key.to_string();
    request_cache().fetch(key, move || async move {
        client::get_text_with_retry(&path).await.map(Rc::new)
    })
}

/// Cached GET of `key` without retries.
pub fn cached_get_once(key: &QueryKey) -> CacheLookup<Rc<String>> {
    let path = key.to_string();
    request_cache().fetch(key, move || async move {
        client::fetch_text(client::build(client::get(&path))?)
            .await
            .map(Rc::new)
    })
}

/// Body already cached for `key`, or `None` without touching the network.
/// A stale body is returned as is and refreshed in the background.
pub fn peek(key: &QueryKey) -> Option<Rc<String>> {
    request_cache().get(key)?;
    match cached_get_once(key) {
        CacheLookup::Fresh(body) => Some(body),
        CacheLookup::Stale { value, refresh } => {
            revalidate(key, refresh);
            Some(value)
        }
        CacheLookup::Pending(_) => None,
    }
}

/// Drives a stale entry's refresh so the cache is updated for the next read.
pub fn revalidate(key: &QueryKey, refresh: SharedFetch<Rc<String>>) {
    let key = key.clone();
    spawn_local(async move {
        if let Err(err) = refresh.await {
            debug!("Background refresh of {} failed: {}", key, err);
        }
    });
}

/// Forgets one response so the next read goes to the network.
pub fn invalidate(key: &QueryKey) {
    request_cache().invalidate(key);
}

/// Forgets every response of one endpoint.
pub fn invalidate_endpoint(endpoint: &str) {
    request_cache().invalidate_endpoint(endpoint);
}

/// Drops every cached response, e.g. after the user signs out.
pub fn clear_all() {
    request_cache().clear();
}

/// Helper function to get cache statistics
pub fn get_cache_stats() -> CacheStats {
    request_cache().stats()
}
