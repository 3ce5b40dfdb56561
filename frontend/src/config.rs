use chrono::Duration;

pub struct Config;

impl Config {
    /// Backend origin. Empty means same-origin relative URLs, which works
    /// behind both the dev proxy and the production reverse proxy. Set
    /// `NFL_API_BASE_URL` at build time to point at another host.
    pub fn api_base_url() -> String {
        option_env!("NFL_API_BASE_URL")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string()
    }

    /// How long a cached response is served without revalidation.
    pub fn cache_stale_after() -> Duration {
        Duration::minutes(5)
    }

    /// Responses kept before the least recently used is evicted.
    pub const CACHE_CAPACITY: usize = 64;

    /// Session check while signed in.
    pub const SESSION_REFRESH_MS: u32 = 300_000;

    pub const PLAYER_SEARCH_DEBOUNCE_MS: u32 = 300;

    /// Names shorter than this are not searched.
    pub const PLAYER_SEARCH_MIN_CHARS: usize = 2;

    pub const UPCOMING_GAMES_STATUS: &'static str = "STATUS_SCHEDULED";

    /// Team stat and ranking views open on the passing offense tab.
    pub const TEAM_TABLE_DEFAULTS: &'static [(&'static str, &'static str)] =
        &[("table", "team_offense_passing")];
}
