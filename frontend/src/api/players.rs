use shared::cache::QueryKey;
use shared::view::query::QueryParams;

pub const PLAYERS_ENDPOINT: &str = "/nfl/players/";

/// Case-insensitive name search, as `{"players": [...]}`.
pub fn search_key(name: &str) -> QueryKey {
    QueryKey::from_query(PLAYERS_ENDPOINT, &QueryParams::from_pairs([("fullName", name.trim())]))
}

pub fn player_stats_path(id: i64, slug: &str) -> String {
    format!("/nfl/player/stats/id/{}/{}", id, urlencoding::encode(slug))
}

/// One player's season game log.
pub fn player_stats_key(id: i64, slug: &str) -> QueryKey {
    QueryKey::endpoint(player_stats_path(id, slug))
}
