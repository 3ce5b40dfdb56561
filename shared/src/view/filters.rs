use std::collections::BTreeMap;

use log::debug;

use super::navigation::{HistoryMode, NavigationState};
use super::sort::{SORT_DIR_PARAM, SORT_KEY_PARAM};

/// Named filter values (`position`, `opponent`, `season_year`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Value of a filter, or `""` for a key this set does not know.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stable `k=v&k=v` rendering, used as the cache key component.
    pub fn to_key_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Filters backed by the page query string.
///
/// Nothing is cached: `filters()` reads the query string each time, so the URL
/// stays the single source of truth.
#[derive(Debug, Clone)]
pub struct FilterState<N> {
    nav: N,
    defaults: FilterSet,
}

impl<N: NavigationState> FilterState<N> {
    pub fn new(nav: N, defaults: FilterSet) -> Self {
        Self { nav, defaults }
    }

    pub fn defaults(&self) -> &FilterSet {
        &self.defaults
    }

    /// Current filters: URL value when present and non-empty, otherwise the default.
    /// Keys without a default are ignored.
    pub fn filters(&self) -> FilterSet {
        let query = self.nav.query();
        let mut current = self.defaults.clone();
        for (key, _) in self.defaults.iter() {
            if let Some(value) = query.get(key).filter(|v| !v.is_empty()) {
                current.insert(key, value);
            }
        }
        current
    }

    /// Sets (or, for an empty value, clears) one filter and drops the active sort
    /// in the same navigation.
    pub fn set_filter(&self, key: &str, value: &str) {
        let mut query = self.nav.query();
        if value.is_empty() {
            query.remove(key);
        } else {
            query.set(key, value);
        }
        query.remove(SORT_KEY_PARAM);
        query.remove(SORT_DIR_PARAM);
        debug!("Filter {} -> {:?}, sort cleared", key, value);
        self.nav.navigate(query, HistoryMode::Push);
    }

    /// Drops every query parameter: all filters back to defaults, no sort.
    pub fn reset_filters(&self) {
        debug!("Resetting filters");
        self.nav.navigate(Default::default(), HistoryMode::Push);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::navigation::MemoryNavigation;
    use crate::view::sort::{SortConfig, SortDirection, SortState};
    use pretty_assertions::assert_eq;

    fn defaults() -> FilterSet {
        FilterSet::from_pairs([
            ("position", "QB"),
            ("opponent", "ARI"),
            ("season_year", "2025"),
            ("season_type", "2"),
            ("location", "all"),
        ])
    }

    #[test]
    fn absent_and_empty_values_use_defaults() {
        let nav = MemoryNavigation::from_query_string("position=&opponent=KC&unknown=1");
        let state = FilterState::new(nav, defaults());
        let filters = state.filters();
        assert_eq!(filters.get("position"), "QB");
        assert_eq!(filters.get("opponent"), "KC");
        assert!(!filters.contains_key("unknown"));
        assert_eq!(filters.len(), 5);
    }

    #[test]
    fn set_then_read_round_trips() {
        let nav = MemoryNavigation::default();
        let state = FilterState::new(nav, defaults());
        state.set_filter("position", "RB");
        assert_eq!(state.filters().get("position"), "RB");
        state.set_filter("position", "");
        assert_eq!(state.filters().get("position"), "QB");
    }

    #[test]
    fn filter_change_clears_sort_in_one_navigation() {
        let nav = MemoryNavigation::from_query_string("sortKey=rec_yards&sortDir=desc");
        let sort = SortState::new(nav.clone());
        assert_eq!(
            sort.sort_config(),
            Some(SortConfig::new("rec_yards", SortDirection::Desc))
        );

        let state = FilterState::new(nav.clone(), defaults());
        state.set_filter("opponent", "KC");

        assert_eq!(sort.sort_config(), None);
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.query().to_query_string(), "opponent=KC");
    }

    #[test]
    fn clearing_a_filter_also_clears_sort() {
        let nav = MemoryNavigation::from_query_string("opponent=KC&sortKey=week&sortDir=asc");
        let state = FilterState::new(nav.clone(), defaults());
        state.set_filter("opponent", "");
        assert!(nav.query().is_empty());
        assert_eq!(state.filters().get("opponent"), "ARI");
    }

    #[test]
    fn reset_restores_defaults_and_clears_sort() {
        let nav = MemoryNavigation::from_query_string(
            "position=TE&location=home&sortKey=week&sortDir=desc",
        );
        let state = FilterState::new(nav.clone(), defaults());
        state.reset_filters();
        assert_eq!(state.filters(), defaults());
        assert_eq!(SortState::new(nav).sort_config(), None);
    }

    #[test]
    fn key_string_is_order_independent() {
        let a = FilterSet::from_pairs([("b", "2"), ("a", "x y")]);
        let b = FilterSet::from_pairs([("a", "x y"), ("b", "2")]);
        assert_eq!(a.to_key_string(), "a=x%20y&b=2");
        assert_eq!(a.to_key_string(), b.to_key_string());
    }
}
