use serde::{Deserialize, Serialize};

use super::game::GameDto;
use super::stat::{StatLine, StatNumber};
use super::team::TeamDto;
use crate::view::sort::{SortValue, Sortable};

/// Player as returned by the name search and nested in game logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummaryDto {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub team: Option<TeamDto>,
}

impl PlayerSummaryDto {
    pub fn team_abbreviation(&self) -> &str {
        self.team
            .as_ref()
            .map(|team| team.abbreviation.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerListResponse {
    #[serde(default)]
    pub players: Vec<PlayerSummaryDto>,
}

/// One game of a player's season, as listed on the player page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLineDto {
    pub id: i64,
    pub game: GameDto,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl GameLineDto {
    pub fn stat(&self, key: &str) -> StatNumber {
        self.stats.get(key)
    }
}

impl Sortable for GameLineDto {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "week" => self.game.week.into(),
            "date" => self.game.date.as_str().into(),
            "is_starter" => self.is_starter.into(),
            _ => self.stat(key).into(),
        }
    }
}

/// `/nfl/player/stats/id/{id}/{slug}`: a player with every game they logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsDto {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub jersey: String,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub team: Option<TeamDto>,
    #[serde(default)]
    pub stats: Vec<GameLineDto>,
}

impl PlayerStatsDto {
    pub fn team_abbreviation(&self) -> &str {
        self.team
            .as_ref()
            .map(|team| team.abbreviation.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAYER: &str = r#"{
        "id": 31, "slug": "josh-allen", "fullName": "Josh Allen", "position": "QB",
        "jersey": "17", "experience": 7,
        "team": {"id": 2, "abbreviation": "BUF", "full_name": "Buffalo Bills"},
        "stats": [
            {"id": 1, "player": 31, "team": 2, "is_starter": true, "pass_yards": 232,
             "completion_pct": "65.70",
             "game": {"id": 9, "date": "09-08", "week": 1, "short_name": "ARI @ BUF",
                      "homeTeam": {"id": 2, "abbreviation": "BUF"},
                      "awayTeam": {"id": 1, "abbreviation": "ARI"},
                      "home_score": 34, "away_score": 28}},
            {"id": 2, "player": 31, "team": 2, "is_starter": true, "pass_yards": 147,
             "completion_pct": null,
             "game": {"id": 12, "date": "09-12", "week": 2, "short_name": "BUF @ MIA",
                      "homeTeam": {"id": 20, "abbreviation": "MIA"},
                      "awayTeam": {"id": 2, "abbreviation": "BUF"}}}
        ]
    }"#;

    #[test]
    fn player_page_parses_game_lines() {
        let player: PlayerStatsDto = serde_json::from_str(PLAYER).unwrap();
        assert_eq!(player.full_name, "Josh Allen");
        assert_eq!(player.team_abbreviation(), "BUF");
        assert_eq!(player.stats.len(), 2);
        assert_eq!(player.stats[1].stat("completion_pct").value(), None);
        assert_eq!(player.stats[0].stat("pass_yards").value(), Some(232.0));
        assert_eq!(player.stats[1].game.opponent_of("BUF"), Some("MIA"));
    }

    #[test]
    fn game_lines_sort_by_week_and_stats() {
        let player: PlayerStatsDto = serde_json::from_str(PLAYER).unwrap();
        let line = &player.stats[0];
        assert_eq!(line.sort_value("week"), SortValue::Number(1.0));
        assert_eq!(line.sort_value("pass_yards"), SortValue::Number(232.0));
        assert_eq!(line.sort_value("is_starter"), SortValue::Bool(true));
    }

    #[test]
    fn search_results_unwrap_players() {
        let list: PlayerListResponse = serde_json::from_str(
            r#"{"players": [{"id": 5, "slug": "a-brown", "fullName": "A.J. Brown", "position": "WR"}]}"#,
        )
        .unwrap();
        assert_eq!(list.players[0].full_name, "A.J. Brown");
        assert_eq!(list.players[0].team_abbreviation(), "");
    }
}
