use std::cell::RefCell;
use std::rc::Rc;

use super::query::QueryParams;

/// How a navigation lands in the browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Adds a history entry (back button returns to the previous view).
    Push,
    /// Overwrites the current entry.
    Replace,
}

/// Read/write access to the query string that holds the view state.
///
/// `navigate` replaces the whole query string in one step, so a reader never
/// observes half of an update.
pub trait NavigationState {
    fn query(&self) -> QueryParams;
    fn navigate(&self, query: QueryParams, mode: HistoryMode);
}

impl<N: NavigationState + ?Sized> NavigationState for Rc<N> {
    fn query(&self) -> QueryParams {
        (**self).query()
    }

    fn navigate(&self, query: QueryParams, mode: HistoryMode) {
        (**self).navigate(query, mode)
    }
}

/// In-memory history stack. Cloning shares the same history.
#[derive(Debug, Clone)]
pub struct MemoryNavigation {
    entries: Rc<RefCell<Vec<QueryParams>>>,
}

impl MemoryNavigation {
    pub fn new(initial: QueryParams) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![initial])),
        }
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::new(QueryParams::parse(query))
    }

    /// Number of history entries, including the initial one.
    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn history(&self) -> Vec<QueryParams> {
        self.entries.borrow().clone()
    }

    /// Steps back one entry, like the browser back button.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.len() > 1 {
            entries.pop();
            true
        } else {
            false
        }
    }
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new(QueryParams::new())
    }
}

impl NavigationState for MemoryNavigation {
    fn query(&self) -> QueryParams {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, query: QueryParams, mode: HistoryMode) {
        let mut entries = self.entries.borrow_mut();
        match mode {
            HistoryMode::Push => entries.push(query),
            HistoryMode::Replace => match entries.last_mut() {
                Some(current) => *current = query,
                None => entries.push(query),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_replace() {
        let nav = MemoryNavigation::from_query_string("a=1");
        nav.navigate(QueryParams::parse("a=2"), HistoryMode::Push);
        assert_eq!(nav.history_len(), 2);
        nav.navigate(QueryParams::parse("a=3"), HistoryMode::Replace);
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.query().get("a"), Some("3"));
        assert!(nav.back());
        assert_eq!(nav.query().get("a"), Some("1"));
        assert!(!nav.back());
    }

    #[test]
    fn clones_share_history() {
        let nav = MemoryNavigation::default();
        let other = nav.clone();
        other.navigate(QueryParams::parse("x=1"), HistoryMode::Push);
        assert_eq!(nav.query().get("x"), Some("1"));
    }
}
