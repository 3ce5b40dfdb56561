use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stat::{StatLine, StatNumber};
use crate::view::sort::{SortValue, Sortable};

/// One sportsbook line attached to a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BettingLineDto {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub open_line: StatNumber,
    #[serde(default)]
    pub open_odds: StatNumber,
    #[serde(default)]
    pub close_line: StatNumber,
    #[serde(default)]
    pub close_odds: StatNumber,
}

/// Team identity as returned by `/nfl/teams/` and nested in games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub point_spread: Vec<BettingLineDto>,
    #[serde(default)]
    pub moneyline: Vec<BettingLineDto>,
    #[serde(default)]
    pub total: Vec<BettingLineDto>,
}

/// A team with one stat line per stat group (`team_offense_passing`, ...).
///
/// Groups the backend has no data for arrive as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStatsDto {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Option<StatLine>>,
}

impl TeamStatsDto {
    /// Stat value within a group; absent groups and keys read as no value.
    pub fn stat(&self, group: &str, key: &str) -> StatNumber {
        self.groups
            .get(group)
            .and_then(Option::as_ref)
            .map(|line| line.get(key))
            .unwrap_or_default()
    }
}

/// Rows of one team-stats tab: a team plus its selected group.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGroupRow {
    pub team_id: i64,
    pub team: String,
    pub abbreviation: String,
    pub stats: StatLine,
}

impl TeamGroupRow {
    pub fn from_team(team: &TeamStatsDto, group: &str) -> Self {
        Self {
            team_id: team.id,
            team: team.full_name.clone(),
            abbreviation: team.abbreviation.clone(),
            stats: team
                .groups
                .get(group)
                .and_then(Option::clone)
                .unwrap_or_default(),
        }
    }
}

impl Sortable for TeamGroupRow {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "team" => self.team.as_str().into(),
            _ => self.stats.get(key).into(),
        }
    }
}

/// A team with its latest league-rank snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRanksDto {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub rank_snapshot: Option<StatLine>,
}

impl TeamRanksDto {
    pub fn rank(&self, key: &str) -> StatNumber {
        self.rank_snapshot
            .as_ref()
            .map(|snapshot| snapshot.get(key))
            .unwrap_or_default()
    }
}

impl Sortable for TeamRanksDto {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "team" => self.full_name.as_str().into(),
            _ => self.rank(key).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEAM_STATS: &str = r#"{
        "id": 4,
        "slug": "kansas-city-chiefs",
        "full_name": "Kansas City Chiefs",
        "nickname": "Chiefs",
        "abbreviation": "KC",
        "conference": "AFC",
        "division": "West",
        "team_offense_passing": {"pass_yards": 4183, "completion_pct": "67.10"},
        "team_coverage_rates": null
    }"#;

    #[test]
    fn team_stats_keep_groups_by_name() {
        let team: TeamStatsDto = serde_json::from_str(TEAM_STATS).unwrap();
        assert_eq!(team.abbreviation, "KC");
        assert_eq!(team.stat("team_offense_passing", "pass_yards").value(), Some(4183.0));
        assert_eq!(team.stat("team_offense_passing", "completion_pct").value(), Some(67.1));
        assert_eq!(team.stat("team_coverage_rates", "man_rate").value(), None);
        assert_eq!(team.stat("team_play_calling", "motion_rate").value(), None);
    }

    #[test]
    fn group_rows_sort_by_stat_or_team_name() {
        let team: TeamStatsDto = serde_json::from_str(TEAM_STATS).unwrap();
        let row = TeamGroupRow::from_team(&team, "team_offense_passing");
        assert_eq!(row.sort_value("pass_yards"), SortValue::Number(4183.0));
        assert_eq!(row.sort_value("team"), SortValue::Text("Kansas City Chiefs".into()));
        assert_eq!(row.sort_value("sacks"), SortValue::Missing);

        let empty = TeamGroupRow::from_team(&team, "team_coverage_rates");
        assert!(empty.stats.0.is_empty());
    }

    #[test]
    fn ranks_without_snapshot_read_as_missing() {
        let ranks: TeamRanksDto = serde_json::from_str(
            r#"{"id": 1, "full_name": "Arizona Cardinals", "abbreviation": "ARI",
                "rank_snapshot": null}"#,
        )
        .unwrap();
        assert_eq!(ranks.rank("pass_yards_rank").value(), None);
        assert_eq!(ranks.sort_value("pass_yards_rank"), SortValue::Missing);
    }

    #[test]
    fn team_parses_betting_lines() {
        let bills: TeamDto = serde_json::from_str(
            r#"{"id": 2, "abbreviation": "BUF", "full_name": "Buffalo Bills",
                "point_spread": [{"display_name": "Spread", "open_line": "-3.5", "open_odds": "-110",
                                  "close_line": "-4.0", "close_odds": "-105"}]}"#,
        )
        .unwrap();
        assert_eq!(bills.point_spread[0].close_line.value(), Some(-4.0));
        assert!(bills.moneyline.is_empty());
    }
}
