use shared::cache::QueryKey;
use shared::dto::game::EventsQuery;

use crate::config::Config;

pub const EVENTS_ENDPOINT: &str = "/nfl/events/";

pub fn events_key(query: &EventsQuery) -> QueryKey {
    QueryKey::from_query(EVENTS_ENDPOINT, &query.to_query())
}

/// Games that have not kicked off yet.
pub fn upcoming_games_key() -> QueryKey {
    events_key(&EventsQuery {
        week: None,
        status: Some(Config::UPCOMING_GAMES_STATUS.to_string()),
    })
}
