pub mod auth;
pub mod cache;
pub mod client;
pub mod events;
pub mod game_logs;
pub mod players;
pub mod teams;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

/// Prefixes `path` with `base_url`; an empty base keeps the path relative.
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
