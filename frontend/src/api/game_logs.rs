use log::debug;
use shared::cache::{CacheLookup, QueryKey};
use shared::dto::game_log::{game_log_query, PlayerGameLogDto};
use shared::dto::page::Page;
use shared::view::filters::FilterSet;
use shared::FetchError;

use crate::api::{cache, client};

pub const GAME_LOGS_ENDPOINT: &str = "/nfl/player/stats/gamelogs";

pub type GameLogPage = Page<PlayerGameLogDto>;

/// One cache entry per filter combination and page.
pub fn game_log_key(filters: &FilterSet, page: u32) -> QueryKey {
    QueryKey::from_query(GAME_LOGS_ENDPOINT, &game_log_query(filters, page))
}

/// One page of game logs for the filters, through the request cache. Not
/// retried: a failed page leaves the loaded rows in place and the user can
/// load it again.
pub async fn fetch_game_log_page(
    filters: &FilterSet,
    page: u32,
) -> Result<GameLogPage, FetchError> {
    let key = game_log_key(filters, page);
    debug!("Fetching game logs: {}", key);
    let body = match cache::cached_get_once(&key) {
        CacheLookup::Stale { value, refresh } => {
            cache::revalidate(&key, refresh);
            value
        }
        lookup => lookup.resolve().await?,
    };
    let page = client::decode::<GameLogPage>(&body)?;
    debug!("Received {} game logs", page.results.len());
    Ok(page)
}

/// A page already in the request cache, if it still decodes.
pub fn cached_game_log_page(filters: &FilterSet, page: u32) -> Option<GameLogPage> {
    let body = cache::peek(&game_log_key(filters, page))?;
    client::decode(&body).ok()
}
