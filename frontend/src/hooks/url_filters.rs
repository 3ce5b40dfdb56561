use std::rc::Rc;

use shared::view::filters::{FilterSet, FilterState};
use yew::prelude::*;

use super::navigation::use_router_navigation;

#[derive(Clone, PartialEq)]
pub struct UrlFiltersHandle {
    pub filters: FilterSet,
    /// `(key, value)`; an empty value restores the default.
    pub set_filter: Callback<(String, String)>,
    pub reset_filters: Callback<()>,
}

/// Filters read from the query string, falling back to `defaults`.
#[hook]
pub fn use_url_filters(defaults: &'static [(&'static str, &'static str)]) -> UrlFiltersHandle {
    let nav = use_router_navigation();
    let state = Rc::new(FilterState::new(nav, FilterSet::from_pairs(defaults.iter().copied())));
    let filters = state.filters();

    let set_filter = {
        let state = state.clone();
        Callback::from(move |(key, value): (String, String)| state.set_filter(&key, &value))
    };
    let reset_filters = Callback::from(move |_: ()| state.reset_filters());

    UrlFiltersHandle {
        filters,
        set_filter,
        reset_filters,
    }
}
