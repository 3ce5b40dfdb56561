use shared::cache::QueryKey;

pub const TEAM_STATS_ENDPOINT: &str = "/nfl/team/stats/";
pub const TEAM_RANKS_ENDPOINT: &str = "/nfl/team/stats/ranks/";

/// Every team with all stat groups. Tabs only change which group is shown,
/// so one response serves all of them.
pub fn team_stats_key() -> QueryKey {
    QueryKey::endpoint(TEAM_STATS_ENDPOINT)
}

pub fn team_ranks_key() -> QueryKey {
    QueryKey::endpoint(TEAM_RANKS_ENDPOINT)
}
