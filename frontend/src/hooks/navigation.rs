use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use shared::view::navigation::{HistoryMode, NavigationState};
use shared::view::query::QueryParams;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// The browser history behind the view state.
///
/// The query is captured at render and updated on every navigation, so two
/// updates from the same event handler see each other.
#[derive(Clone)]
pub struct RouterNavigation {
    navigator: Navigator,
    route: Route,
    current: Rc<RefCell<QueryParams>>,
}

impl NavigationState for RouterNavigation {
    fn query(&self) -> QueryParams {
        self.current.borrow().clone()
    }

    fn navigate(&self, query: QueryParams, mode: HistoryMode) {
        let result = match (mode, query.is_empty()) {
            (HistoryMode::Push, true) => {
                self.navigator.push(&self.route);
                Ok(())
            }
            (HistoryMode::Replace, true) => {
                self.navigator.replace(&self.route);
                Ok(())
            }
            (HistoryMode::Push, false) => {
                self.navigator.push_with_query(&self.route, &query.pairs())
            }
            (HistoryMode::Replace, false) => {
                self.navigator.replace_with_query(&self.route, &query.pairs())
            }
        };
        if let Err(err) = result {
            warn!("Failed to update the URL to ?{}: {:?}", query, err);
        }
        *self.current.borrow_mut() = query;
    }
}

#[hook]
pub fn use_router_navigation() -> RouterNavigation {
    let navigator = use_navigator().expect("Navigator not found");
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let query = use_location()
        .map(|location| QueryParams::parse(location.query_str()))
        .unwrap_or_default();

    RouterNavigation {
        navigator,
        route,
        current: Rc::new(RefCell::new(query)),
    }
}
