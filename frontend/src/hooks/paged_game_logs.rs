use std::cell::RefCell;
use std::rc::Rc;

use shared::dto::game_log::PlayerGameLogDto;
use shared::view::filters::FilterSet;
use shared::view::pagination::{PageRequest, PageStats, PagedQuery, Resolution};
use shared::FetchError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::game_logs::{cached_game_log_page, fetch_game_log_page};

#[derive(Clone, PartialEq)]
pub struct GameLogsHandle {
    /// Every loaded row, in page order.
    pub rows: Rc<Vec<PlayerGameLogDto>>,
    pub stats: PageStats,
    pub loading: bool,
    pub fetching_next_page: bool,
    pub has_next_page: bool,
    pub error: Option<String>,
    pub fetch_next_page: Callback<()>,
}

type SharedQuery = Rc<RefCell<PagedQuery<PlayerGameLogDto>>>;

fn load_page(
    query: SharedQuery,
    update: UseForceUpdateHandle,
    filters: FilterSet,
    request: PageRequest,
) {
    spawn_local(async move {
        let result = fetch_game_log_page(&filters, request.page).await;
        let resolution = query.borrow_mut().resolve(&request, result);
        if resolution == Resolution::Applied {
            update.force_update();
        }
    });
}

/// Game logs for `filters`, accumulated page by page.
///
/// New filters start over from the pages the request cache still holds for
/// them, or from page 1; pages still loading for the previous filters are
/// discarded when they arrive.
#[hook]
pub fn use_paged_game_logs(filters: FilterSet) -> GameLogsHandle {
    let query: SharedQuery = use_mut_ref(PagedQuery::new);
    let update = use_force_update();

    {
        let query = query.clone();
        let update = update.clone();
        use_effect_with(filters.clone(), move |filters| {
            let request = query
                .borrow_mut()
                .restore(filters.to_key_string(), |page| cached_game_log_page(filters, page));
            update.force_update();
            if let Some(request) = request {
                load_page(query.clone(), update, filters.clone(), request);
            }
            move || query.borrow_mut().cancel()
        });
    }

    let fetch_next_page = {
        let query = query.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let request = query.borrow_mut().fetch_next_page();
            if let Some(request) = request {
                update.force_update();
                load_page(query.clone(), update.clone(), filters.clone(), request);
            }
        })
    };

    let current = query.borrow();
    GameLogsHandle {
        rows: Rc::new(current.rows()),
        stats: current.stats(),
        loading: current.is_loading(),
        fetching_next_page: current.is_fetching_next_page(),
        has_next_page: current.has_next_page(),
        error: current.error().map(FetchError::user_message),
        fetch_next_page,
    }
}
