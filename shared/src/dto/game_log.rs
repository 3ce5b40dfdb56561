use serde::{Deserialize, Serialize};

use super::game::GameDto;
use super::player::PlayerSummaryDto;
use super::stat::{StatLine, StatNumber};
use crate::view::filters::FilterSet;
use crate::view::query::QueryParams;
use crate::view::sort::{Extractors, SortValue, Sortable};

/// One player's line in one game, from `/nfl/player/stats/gamelogs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameLogDto {
    pub id: i64,
    pub player: PlayerSummaryDto,
    pub game: GameDto,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl PlayerGameLogDto {
    pub fn stat(&self, key: &str) -> StatNumber {
        self.stats.get(key)
    }

    pub fn team(&self) -> &str {
        self.player.team_abbreviation()
    }

    pub fn opponent(&self) -> &str {
        self.game.opponent_of(self.team()).unwrap_or_default()
    }
}

impl Sortable for PlayerGameLogDto {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "is_starter" => self.is_starter.into(),
            _ => self.stat(key).into(),
        }
    }
}

/// Extractors for the game log columns that are not flat stat fields.
pub fn game_log_extractors() -> Extractors<PlayerGameLogDto> {
    Extractors::new()
        .with("player", |log: &PlayerGameLogDto| {
            SortValue::from(log.player.full_name.as_str())
        })
        .with("team", |log: &PlayerGameLogDto| SortValue::from(log.team()))
        .with("opponent", |log: &PlayerGameLogDto| {
            SortValue::from(log.opponent())
        })
        .with("week", |log: &PlayerGameLogDto| SortValue::from(log.game.week))
        .with("date", |log: &PlayerGameLogDto| {
            SortValue::from(log.game.date.as_str())
        })
}

/// Filter keys the game log endpoint understands, with the values used when
/// the URL leaves them out.
pub const GAME_LOG_FILTER_DEFAULTS: &[(&str, &str)] = &[
    ("position", "QB"),
    ("opponent", "ARI"),
    ("season_year", "2025"),
    ("season_type", "2"),
    ("location", "all"),
];

/// Backend query for one page of game logs. Empty filter values are not sent.
pub fn game_log_query(filters: &FilterSet, page: u32) -> QueryParams {
    let mut query = QueryParams::new();
    for (key, value) in filters.iter().filter(|(_, value)| !value.is_empty()) {
        query.set(key, value);
    }
    query.set("page", page.to_string());
    query
}
