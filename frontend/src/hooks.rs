//! Hooks that bind the URL-driven view state and the request cache to Yew
//! components.

pub mod cached_query;
pub mod navigation;
pub mod paged_game_logs;
pub mod url_filters;
pub mod url_sort;

pub use cached_query::{use_cached_query, QueryState};
pub use navigation::{use_router_navigation, RouterNavigation};
pub use paged_game_logs::{use_paged_game_logs, GameLogsHandle};
pub use url_filters::{use_url_filters, UrlFiltersHandle};
pub use url_sort::{use_url_sort, UrlSortHandle};
