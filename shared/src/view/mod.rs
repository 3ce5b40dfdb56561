//! URL-driven view state: the query string is the only persisted state, and
//! everything here reads it back on demand.

pub mod filters;
pub mod latest;
pub mod navigation;
pub mod pagination;
pub mod query;
pub mod sort;

pub use filters::{FilterSet, FilterState};
pub use latest::{LatestRequest, Ticket};
pub use navigation::{HistoryMode, MemoryNavigation, NavigationState};
pub use pagination::{PageAccumulator, PageRequest, PageStats, PagedQuery, Resolution};
pub use query::QueryParams;
pub use sort::{sort_rows, Extractors, SortConfig, SortDirection, SortState, SortValue, Sortable};
