//! Column sorting: the URL-held sort descriptor and the projection that applies
//! it to a row collection.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use super::navigation::{HistoryMode, NavigationState};

pub const SORT_KEY_PARAM: &str = "sortKey";
pub const SORT_DIR_PARAM: &str = "sortDir";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Only an explicit `asc` reads as ascending; anything else sorts descending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

/// Active sort column. `Option<SortConfig>::None` is the natural (server) order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// A value a column can be ordered by.
///
/// Variants never coerce into each other: mixed columns order
/// `Missing < Bool < Number < Text`.
#[derive(Debug, Clone)]
pub enum SortValue {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Missing)
    }
}

/// Direct field lookup, used for any column without a registered extractor.
pub trait Sortable {
    fn sort_value(&self, key: &str) -> SortValue;
}

type Extractor<R> = Rc<dyn Fn(&R) -> SortValue>;

/// Per-column value extractors for fields that are not flat on the row,
/// e.g. a week number nested inside the game.
pub struct Extractors<R> {
    by_key: HashMap<String, Extractor<R>>,
}

impl<R> Extractors<R> {
    pub fn new() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }

    pub fn with<F>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&R) -> SortValue + 'static,
    {
        self.by_key.insert(key.into(), Rc::new(extractor));
        self
    }
}

impl<R: Sortable> Extractors<R> {
    /// Registered extractor for `key`, else the row's own field lookup.
    pub fn value(&self, row: &R, key: &str) -> SortValue {
        match self.by_key.get(key) {
            Some(extract) => extract(row),
            None => row.sort_value(key),
        }
    }
}

impl<R> Default for Extractors<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Extractors<R> {
    fn clone(&self) -> Self {
        Self {
            by_key: self.by_key.clone(),
        }
    }
}

impl<R> fmt::Debug for Extractors<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.by_key.keys().collect();
        keys.sort();
        f.debug_struct("Extractors").field("keys", &keys).finish()
    }
}

/// Sorted copy of `rows`. The input is never reordered.
///
/// Without a config the copy keeps source order. The sort is stable in both
/// directions: rows with equal values keep their source order, so re-sorting
/// identical input never shuffles ties.
pub fn sort_rows<R>(rows: &[R], config: Option<&SortConfig>, extractors: &Extractors<R>) -> Vec<R>
where
    R: Sortable + Clone,
{
    let Some(config) = config else {
        return rows.to_vec();
    };

    // Extract once per row instead of once per comparison.
    let mut keyed: Vec<(SortValue, R)> = rows
        .iter()
        .map(|row| (extractors.value(row, &config.key), row.clone()))
        .collect();

    match config.direction {
        SortDirection::Asc => keyed.sort_by(|(a, _), (b, _)| a.cmp(b)),
        SortDirection::Desc => keyed.sort_by(|(a, _), (b, _)| b.cmp(a)),
    }

    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Sort descriptor backed by the `sortKey`/`sortDir` query parameters.
#[derive(Debug, Clone)]
pub struct SortState<N> {
    nav: N,
}

impl<N: NavigationState> SortState<N> {
    pub fn new(nav: N) -> Self {
        Self { nav }
    }

    pub fn sort_config(&self) -> Option<SortConfig> {
        let query = self.nav.query();
        let key = query.get(SORT_KEY_PARAM).filter(|k| !k.is_empty())?;
        Some(SortConfig::new(
            key,
            SortDirection::from_param(query.get(SORT_DIR_PARAM)),
        ))
    }

    /// Column header click: a new column starts ascending, the ascending column
    /// flips to descending, the descending column flips back to ascending.
    ///
    /// Replaces the current history entry rather than adding one per click.
    pub fn handle_header_click(&self, key: &str) {
        let direction = match self.sort_config() {
            Some(current) if current.key == key && current.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };

        let mut query = self.nav.query();
        query.set(SORT_KEY_PARAM, key);
        query.set(SORT_DIR_PARAM, direction.as_str());
        debug!("Sorting by {} {}", key, direction.as_str());
        self.nav.navigate(query, HistoryMode::Replace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::navigation::MemoryNavigation;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        yards: i64,
        name: String,
        week: Option<u32>,
    }

    impl Sortable for Row {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "id" => self.id.into(),
                "yards" => self.yards.into(),
                "name" => self.name.as_str().into(),
                _ => SortValue::Missing,
            }
        }
    }

    fn row(id: u32, yards: i64, name: &str, week: Option<u32>) -> Row {
        Row {
            id,
            yards,
            name: name.to_string(),
            week,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, 80, "Kelce", Some(3)),
            row(2, 120, "Hill", Some(1)),
            row(3, 80, "Adams", None),
            row(4, 15, "Brown", Some(2)),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn week_extractor() -> Extractors<Row> {
        Extractors::new().with("week", |r: &Row| SortValue::from(r.week.unwrap_or(0)))
    }

    #[test]
    fn no_config_is_a_copy_in_source_order() {
        let input = rows();
        let sorted = sort_rows(&input, None, &Extractors::new());
        assert_eq!(sorted, input);
    }

    #[test]
    fn ascending_and_descending_keep_ties_in_source_order() {
        let input = rows();
        let asc = sort_rows(&input, Some(&SortConfig::asc("yards")), &Extractors::new());
        assert_eq!(ids(&asc), vec![4, 1, 3, 2]);
        let desc = sort_rows(&input, Some(&SortConfig::desc("yards")), &Extractors::new());
        assert_eq!(ids(&desc), vec![2, 1, 3, 4]);
    }

    #[test]
    fn registered_extractor_wins_over_direct_lookup() {
        let input = rows();
        let sorted = sort_rows(&input, Some(&SortConfig::asc("week")), &week_extractor());
        assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
    }

    #[test]
    fn unknown_column_leaves_order_untouched() {
        let input = rows();
        let sorted = sort_rows(&input, Some(&SortConfig::desc("nope")), &Extractors::new());
        assert_eq!(ids(&sorted), ids(&input));
    }

    #[test]
    fn text_sorts_lexicographically() {
        let sorted = sort_rows(&rows(), Some(&SortConfig::asc("name")), &Extractors::new());
        assert_eq!(ids(&sorted), vec![3, 4, 2, 1]);
    }

    #[test]
    fn mixed_values_order_by_kind() {
        let mut values = vec![
            SortValue::from("a"),
            SortValue::from(2.5),
            SortValue::Missing,
            SortValue::from(true),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                SortValue::Missing,
                SortValue::from(true),
                SortValue::from(2.5),
                SortValue::from("a"),
            ]
        );
    }

    #[test]
    fn header_click_cycle() {
        let nav = MemoryNavigation::from_query_string("position=WR");
        let state = SortState::new(nav.clone());
        assert_eq!(state.sort_config(), None);

        state.handle_header_click("x");
        assert_eq!(state.sort_config(), Some(SortConfig::asc("x")));
        state.handle_header_click("x");
        assert_eq!(state.sort_config(), Some(SortConfig::desc("x")));
        state.handle_header_click("x");
        assert_eq!(state.sort_config(), Some(SortConfig::asc("x")));

        // Replace navigations: no history entry per click, filters untouched.
        assert_eq!(nav.history_len(), 1);
        assert_eq!(nav.query().get("position"), Some("WR"));
    }

    #[test]
    fn clicking_another_column_starts_ascending() {
        let nav = MemoryNavigation::from_query_string("sortKey=yards&sortDir=asc");
        let state = SortState::new(nav);
        state.handle_header_click("name");
        assert_eq!(state.sort_config(), Some(SortConfig::asc("name")));
    }

    #[test]
    fn missing_direction_reads_as_descending() {
        let nav = MemoryNavigation::from_query_string("sortKey=yards");
        let state = SortState::new(nav);
        assert_eq!(state.sort_config(), Some(SortConfig::desc("yards")));
        state.handle_header_click("yards");
        assert_eq!(state.sort_config(), Some(SortConfig::asc("yards")));
    }

    #[test]
    fn empty_sort_key_means_no_sort() {
        let state = SortState::new(MemoryNavigation::from_query_string("sortKey=&sortDir=asc"));
        assert_eq!(state.sort_config(), None);
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec((0i64..40, prop::option::of(0u32..18)), 0..30).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (yards, week))| row(i as u32, yards, "p", week))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn null_sort_is_identity(input in arb_rows()) {
            prop_assert_eq!(sort_rows(&input, None, &week_extractor()), input);
        }

        #[test]
        fn sorting_is_idempotent(input in arb_rows(), desc in any::<bool>()) {
            let config = if desc { SortConfig::desc("yards") } else { SortConfig::asc("yards") };
            let once = sort_rows(&input, Some(&config), &Extractors::new());
            let twice = sort_rows(&once, Some(&config), &Extractors::new());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn descending_reverses_ascending_for_distinct_values(
            yards in prop::collection::hash_set(-500i64..500, 0..30)
        ) {
            let input: Vec<Row> = yards
                .into_iter()
                .enumerate()
                .map(|(i, y)| row(i as u32, y, "p", None))
                .collect();
            let mut asc = sort_rows(&input, Some(&SortConfig::asc("yards")), &Extractors::new());
            let desc = sort_rows(&input, Some(&SortConfig::desc("yards")), &Extractors::new());
            asc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn ties_keep_source_order(input in arb_rows()) {
            let sorted = sort_rows(&input, Some(&SortConfig::desc("yards")), &Extractors::new());
            for pair in sorted.windows(2) {
                if pair[0].yards == pair[1].yards {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
