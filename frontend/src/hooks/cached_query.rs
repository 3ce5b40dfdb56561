use std::rc::Rc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use shared::cache::{CacheLookup, QueryKey};
use shared::view::latest::{LatestRequest, Ticket};
use shared::FetchError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{cache, client};

/// What a component renders for one cached query.
pub struct QueryState<T> {
    pub data: Option<Rc<T>>,
    /// A request is outstanding. `data` may still hold the previous value.
    pub loading: bool,
    pub error: Option<String>,
    /// Drops the cached response and fetches it again.
    pub refetch: Callback<()>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            refetch: Callback::noop(),
        }
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
            refetch: self.refetch.clone(),
        }
    }
}

impl<T> PartialEq for QueryState<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_data = match (&self.data, &other.data) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_data
            && self.loading == other.loading
            && self.error == other.error
            && self.refetch == other.refetch
    }
}

/// Reads `key` through the request cache. `None` disables the query.
///
/// A fresh cached value renders without a request. A stale one renders at
/// once and is replaced when revalidation finishes. When `key` changes
/// before a response arrives, that response is dropped.
#[hook]
pub fn use_cached_query<T>(key: Option<QueryKey>) -> QueryState<T>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(QueryState::<T>::default);
    let latest = (*use_state(LatestRequest::new)).clone();
    let generation = use_state(|| 0u32);

    let refetch = {
        let key = key.clone();
        let generation = generation.clone();
        Callback::from(move |_: ()| {
            if let Some(key) = &key {
                cache::invalidate(key);
            }
            generation.set(*generation + 1);
        })
    };

    {
        let state = state.clone();
        use_effect_with((key, *generation), move |(key, _)| {
            let cleanup = latest.clone();
            match key.clone() {
                Some(key) => load(key, state, latest),
                None => {
                    latest.cancel();
                    state.set(QueryState::default());
                }
            }
            move || cleanup.cancel()
        });
    }

    QueryState {
        refetch,
        ..(*state).clone()
    }
}

fn load<T>(key: QueryKey, state: UseStateHandle<QueryState<T>>, latest: LatestRequest)
where
    T: DeserializeOwned + 'static,
{
    let ticket = latest.issue();
    let lookup = cache::cached_get(&key);
    let fresh = matches!(lookup, CacheLookup::Fresh(_));

    let shown = match lookup.value().map(|body| client::decode::<T>(body)) {
        Some(Ok(data)) => Some(Rc::new(data)),
        Some(Err(err)) => {
            warn!("Cached response for {} did not decode: {}", key, err);
            None
        }
        None => None,
    };

    if fresh {
        let error = shown
            .is_none()
            .then(|| "Unexpected response from the server".to_string());
        state.set(QueryState {
            data: shown,
            loading: false,
            error,
            ..Default::default()
        });
        return;
    }

    state.set(QueryState {
        data: shown.clone(),
        loading: true,
        ..Default::default()
    });

    spawn_local(async move {
        let result = lookup
            .resolve()
            .await
            .and_then(|body| client::decode::<T>(&body));

        if let Some(next) = settle(&latest, ticket, &key, result, shown) {
            state.set(next);
        }
    });
}

/// State to publish for a finished request, or `None` when a newer key (or
/// an unmount) took over while it ran. A failure keeps the `shown` data.
pub(crate) fn settle<T>(
    latest: &LatestRequest,
    ticket: Ticket,
    key: &QueryKey,
    result: Result<T, FetchError>,
    shown: Option<Rc<T>>,
) -> Option<QueryState<T>> {
    if !latest.is_current(ticket) {
        debug!("Dropping stale response for {}", key);
        return None;
    }

    Some(match result {
        Ok(data) => QueryState {
            data: Some(Rc::new(data)),
            loading: false,
            ..Default::default()
        },
        Err(err) => {
            warn!("Request for {} failed: {}", key, err);
            QueryState {
                data: shown,
                loading: false,
                error: Some(err.user_message()),
                ..Default::default()
            }
        }
    })
}
