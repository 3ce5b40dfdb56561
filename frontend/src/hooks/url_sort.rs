use std::rc::Rc;

use shared::view::sort::{SortConfig, SortState};
use yew::prelude::*;

use super::navigation::use_router_navigation;

#[derive(Clone, PartialEq)]
pub struct UrlSortHandle {
    pub sort: Option<SortConfig>,
    pub on_header_click: Callback<String>,
}

#[hook]
pub fn use_url_sort() -> UrlSortHandle {
    let state = Rc::new(SortState::new(use_router_navigation()));
    let sort = state.sort_config();
    let on_header_click = Callback::from(move |key: String| state.handle_header_click(&key));

    UrlSortHandle {
        sort,
        on_header_click,
    }
}
