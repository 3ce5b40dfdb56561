use serde::{Deserialize, Serialize};

use super::team::TeamDto;
use crate::view::query::QueryParams;

/// A scheduled or completed game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameDto {
    pub id: i64,
    /// ISO timestamp on `/nfl/events/`, `MM-DD` inside a player's game log.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub season_year: Option<i32>,
    #[serde(default)]
    pub season_type: Option<i32>,
    #[serde(default)]
    pub week: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "homeTeam", default)]
    pub home_team: TeamDto,
    #[serde(rename = "awayTeam", default)]
    pub away_team: TeamDto,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
}

impl GameDto {
    /// Abbreviation of the team across from `team`, if `team` played in this game.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home_team.abbreviation == team {
            Some(self.away_team.abbreviation.as_str())
        } else if self.away_team.abbreviation == team {
            Some(self.home_team.abbreviation.as_str())
        } else {
            None
        }
    }

    pub fn is_home(&self, team: &str) -> bool {
        self.home_team.abbreviation == team
    }

    /// `"24-17"` from the point of view of `team`, or `None` before kickoff.
    pub fn score_for(&self, team: &str) -> Option<String> {
        let (home, away) = (self.home_score?, self.away_score?);
        if self.is_home(team) {
            Some(format!("{}-{}", home, away))
        } else {
            Some(format!("{}-{}", away, home))
        }
    }
}

/// Query for `/nfl/events/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventsQuery {
    pub week: Option<u32>,
    pub status: Option<String>,
}

impl EventsQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(week) = self.week {
            query.set("week", week.to_string());
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            query.set("status", status);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn game() -> GameDto {
        serde_json::from_str(
            r#"{"id": 9, "date": "2024-09-08T17:00:00Z", "name": "Arizona Cardinals at Buffalo Bills",
                "short_name": "ARI @ BUF", "season_year": 2024, "season_type": 2, "week": 1,
                "status": "STATUS_FINAL",
                "homeTeam": {"id": 2, "abbreviation": "BUF", "full_name": "Buffalo Bills"},
                "awayTeam": {"id": 1, "abbreviation": "ARI", "full_name": "Arizona Cardinals"},
                "home_score": 34, "away_score": 28}"#,
        )
        .unwrap()
    }

    #[test]
    fn opponent_and_score_follow_the_team() {
        let game = game();
        assert_eq!(game.opponent_of("ARI"), Some("BUF"));
        assert_eq!(game.opponent_of("BUF"), Some("ARI"));
        assert_eq!(game.opponent_of("KC"), None);
        assert_eq!(game.score_for("BUF").as_deref(), Some("34-28"));
        assert_eq!(game.score_for("ARI").as_deref(), Some("28-34"));
    }

    #[test]
    fn events_query_leaves_out_unset_params() {
        let query = EventsQuery {
            week: Some(5),
            status: Some("STATUS_SCHEDULED".into()),
        };
        assert_eq!(query.to_query().to_query_string(), "week=5&status=STATUS_SCHEDULED");
        assert_eq!(EventsQuery::default().to_query().to_query_string(), "");
    }

    #[test]
    fn unplayed_game_has_no_score() {
        let mut game = game();
        game.home_score = None;
        assert_eq!(game.score_for("BUF"), None);
    }
}
