use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::dto::player::PlayerListResponse;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::players::search_key;
use crate::config::Config;
use crate::hooks::use_cached_query;
use crate::Route;

/// Shorter queries neither search nor open the results list.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= Config::PLAYER_SEARCH_MIN_CHARS
}

/// Name search in the navigation bar. Typing is debounced; each settled
/// query goes through the request cache, and answers for an older query are
/// never shown.
#[function_component(PlayerSearch)]
pub fn player_search() -> Html {
    let input = use_state(String::new);
    let query = use_state(String::new);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let searchable = is_searchable(&query);
    let key = searchable.then(|| search_key(query.trim()));
    let results = use_cached_query::<PlayerListResponse>(key);

    let oninput = {
        let input = input.clone();
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(value.clone());
            let query = query.clone();
            // Replacing the handle drops, and so cancels, the previous timer.
            *pending.borrow_mut() = Some(Timeout::new(Config::PLAYER_SEARCH_DEBOUNCE_MS, move || {
                query.set(value)
            }));
        })
    };

    let clear = {
        let input = input.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            query.set(String::new());
        })
    };

    let show_results = searchable && *input == *query;

    html! {
        <div class="relative w-64">
            <input
                type="search"
                placeholder="Search players"
                value={(*input).clone()}
                {oninput}
                class="w-full rounded-md border border-white/20 bg-white/10 px-3 py-1.5 text-sm text-white placeholder-white/60 focus:outline-none focus:ring-2 focus:ring-white/40"
            />
            if show_results {
                <div class="absolute z-50 mt-1 w-full overflow-hidden rounded-md bg-white text-sm text-gray-900 shadow-lg">
                    if results.loading && results.data.is_none() {
                        <div class="px-3 py-2 text-gray-500">{"Searching..."}</div>
                    } else if let Some(error) = &results.error {
                        <div class="px-3 py-2 text-red-600">{error.clone()}</div>
                    } else if let Some(list) = &results.data {
                        if list.players.is_empty() {
                            <div class="px-3 py-2 text-gray-500">{"No players found"}</div>
                        }
                        {for list.players.iter().map(|player| html! {
                            <div key={player.id.to_string()} onclick={clear.clone()}>
                                <Link<Route>
                                    to={Route::Player { id: player.id, slug: player.slug.clone() }}
                                    classes={classes!("block", "px-3", "py-2", "hover:bg-gray-100")}
                                >
                                    <span class="font-medium">{&player.full_name}</span>
                                    <span class="ml-2 text-xs text-gray-500">
                                        {format!("{} {}", player.position, player.team_abbreviation())}
                                    </span>
                                </Link<Route>>
                            </div>
                        })}
                    }
                </div>
            }
        </div>
    }
}
