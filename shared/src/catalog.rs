//! Static stat catalog: which columns each position and team table displays,
//! plus the option lists behind the filter selects.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatColumn {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> StatColumn {
    StatColumn { key, label }
}

/// A named table of columns, e.g. one team stat tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub columns: &'static [StatColumn],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FilterOption {
    const fn plain(value: &'static str) -> Self {
        Self { value, label: value }
    }
}

const QB_COLUMNS: &[StatColumn] = &[
    col("completions", "Cmp"),
    col("pass_attempts", "Pass Att"),
    col("pass_yards", "Pass Yds"),
    col("yards_per_pass_attempt", "YPA"),
    col("long_passing", "Long Pass"),
    col("completion_pct", "Cmp %"),
    col("pass_touchdowns", "Pass TD"),
    col("pass_rating", "Pass Rate"),
    col("adjusted_qbr", "QBR"),
    col("sacks", "Sck"),
    col("rush_attempts", "Rush Att"),
    col("rush_yards", "Rush Yds"),
    col("rush_touchdowns", "Rush TD"),
    col("yards_per_rush_attempt", "YPC"),
    col("long_rushing", "Long Rush"),
];

const RB_COLUMNS: &[StatColumn] = &[
    col("rush_attempts", "Rush Att"),
    col("rush_yards", "Rush Yds"),
    col("yards_per_rush_attempt", "YPC"),
    col("long_rushing", "Long Rush"),
    col("rush_touchdowns", "Rush TD"),
    col("receptions", "Receptions"),
    col("rec_targets", "Targets"),
    col("rec_yards", "Receiving Yards"),
    col("yards_per_reception", "YPR"),
    col("long_reception", "Long Rec"),
    col("rec_touchdowns", "Rec TD"),
];

const WR_COLUMNS: &[StatColumn] = &[
    col("receptions", "Receptions"),
    col("rec_targets", "Targets"),
    col("rec_yards", "Rec Yds"),
    col("yards_per_reception", "Yds/Rec"),
    col("long_reception", "Long Rec"),
    col("rec_touchdowns", "Rec TD"),
    col("rush_attempts", "Rush Att"),
    col("rush_yards", "Rush Yds"),
    col("yards_per_rush_attempt", "YPC"),
    col("long_rushing", "Long Rush"),
    col("rush_touchdowns", "Rush TD"),
];

const TE_COLUMNS: &[StatColumn] = &[
    col("receptions", "Receptions"),
    col("rec_targets", "Targets"),
    col("rec_yards", "Rec Yds"),
    col("yards_per_reception", "YPR"),
    col("long_reception", "Long Rec"),
    col("rec_touchdowns", "Rec TD"),
    col("rush_attempts", "Rush Att"),
    col("rush_yards", "Rush Yds"),
    col("yards_per_rush_attempt", "YPC"),
    col("long_rushing", "Long Rush"),
    col("rush_touchdowns", "Rush TD"),
];

/// Columns shown for a player position. Unknown positions show no stat columns.
pub fn position_columns(position: &str) -> &'static [StatColumn] {
    match position {
        "QB" => QB_COLUMNS,
        "RB" => RB_COLUMNS,
        "WR" => WR_COLUMNS,
        "TE" => TE_COLUMNS,
        _ => &[],
    }
}

pub const POSITIONS: &[FilterOption] = &[
    FilterOption::plain("QB"),
    FilterOption::plain("RB"),
    FilterOption::plain("WR"),
    FilterOption::plain("TE"),
];

pub const TEAM_ABBREVIATIONS: &[FilterOption] = &[
    FilterOption::plain("ARI"),
    FilterOption::plain("ATL"),
    FilterOption::plain("BAL"),
    FilterOption::plain("BUF"),
    FilterOption::plain("CAR"),
    FilterOption::plain("CHI"),
    FilterOption::plain("CIN"),
    FilterOption::plain("CLE"),
    FilterOption::plain("DAL"),
    FilterOption::plain("DEN"),
    FilterOption::plain("DET"),
    FilterOption::plain("GB"),
    FilterOption::plain("HOU"),
    FilterOption::plain("IND"),
    FilterOption::plain("JAX"),
    FilterOption::plain("KC"),
    FilterOption::plain("LAC"),
    FilterOption::plain("LAR"),
    FilterOption::plain("LV"),
    FilterOption::plain("MIA"),
    FilterOption::plain("MIN"),
    FilterOption::plain("NE"),
    FilterOption::plain("NO"),
    FilterOption::plain("NYG"),
    FilterOption::plain("NYJ"),
    FilterOption::plain("PHI"),
    FilterOption::plain("PIT"),
    FilterOption::plain("SEA"),
    FilterOption::plain("SF"),
    FilterOption::plain("TB"),
    FilterOption::plain("TEN"),
    FilterOption::plain("WSH"),
];

pub const SEASON_YEARS: &[FilterOption] = &[
    FilterOption::plain("2025"),
    FilterOption::plain("2024"),
    FilterOption::plain("2023"),
];

/// Season type codes as stored by the backend.
pub const SEASON_TYPES: &[FilterOption] = &[
    FilterOption { value: "2", label: "Regular Season" },
    FilterOption { value: "3", label: "Postseason" },
    FilterOption { value: "1", label: "Preseason" },
];

pub const LOCATIONS: &[FilterOption] = &[
    FilterOption { value: "all", label: "Home & Away" },
    FilterOption { value: "home", label: "Home" },
    FilterOption { value: "away", label: "Away" },
];

pub const TEAM_STAT_GROUPS: &[StatGroup] = &[
    StatGroup {
        key: "team_offense_passing",
        label: "Off. Passing",
        columns: &[
            col("pass_attempts", "Att"),
            col("completions", "Cmp"),
            col("completion_pct", "Cmp %"),
            col("yards_per_attempt", "Yds/Att"),
            col("pass_yards", "Pass Yds"),
            col("pass_touchdowns", "TD"),
            col("interceptions", "Int"),
            col("pass_rating", "Rate"),
            col("sacks", "Sck"),
            col("sack_yards", "SckY"),
        ],
    },
    StatGroup {
        key: "team_offense_rushing",
        label: "Off. Rushing",
        columns: &[
            col("rush_attempts", "Att"),
            col("rush_yards", "Rush Yds"),
            col("yards_per_carry", "YPC"),
            col("rush_touchdowns", "TD"),
            col("rush_fumbles", "Rush Fum"),
        ],
    },
    StatGroup {
        key: "team_offense_receiving",
        label: "Off. Receiving",
        columns: &[
            col("receptions", "Rec"),
            col("rec_yards", "Yds"),
            col("yards_per_reception", "Yds/Rec"),
            col("rec_touchdowns", "TD"),
            col("rec_fumbles", "Rec Fum"),
        ],
    },
    StatGroup {
        key: "team_defense_passing",
        label: "Def. Passing",
        columns: &[
            col("pass_attempts", "Att"),
            col("completions", "Cmp"),
            col("completion_pct", "Cmp %"),
            col("yards_per_attempt", "Yds/Att"),
            col("pass_yards", "Pass Yds"),
            col("pass_touchdowns", "TD"),
            col("interceptions", "Int"),
            col("pass_rating", "Rate"),
            col("sacks", "Sck"),
        ],
    },
    StatGroup {
        key: "team_defense_rushing",
        label: "Def. Rushing",
        columns: &[
            col("rush_attempts", "Att"),
            col("rush_yards", "Yds"),
            col("yards_per_carry", "YPC"),
            col("rush_touchdowns", "TD"),
            col("rush_fumbles", "Rush Fum"),
        ],
    },
    StatGroup {
        key: "team_defense_receiving",
        label: "Def. Receiving",
        columns: &[
            col("receptions", "Rec"),
            col("rec_yards", "Yds"),
            col("yards_per_reception", "Yds/Rec"),
            col("rec_touchdowns", "TD"),
            col("rec_fumbles", "Rec Fum"),
            col("pass_defended", "PDef"),
        ],
    },
    StatGroup {
        key: "team_advance_offense",
        label: "Adv. Off.",
        columns: &[
            col("expected_points_added_per_play", "EPA/Play"),
            col("total_expected_points_added", "Total EPA"),
            col("success_pct", "Success %"),
            col("expected_points_added_per_pass", "EPA/Pass"),
            col("expected_points_added_per_rush", "EPA/Rush"),
            col("average_depth_of_target", "ADoT"),
            col("scramble_pct", "Scramble %"),
            col("interception_pct", "Int %"),
        ],
    },
    StatGroup {
        key: "team_advance_defense",
        label: "Adv. Def.",
        columns: &[
            col("expected_points_added_per_play", "EPA/Play"),
            col("total_expected_points_added", "Total EPA"),
            col("success_pct", "Success %"),
            col("expected_points_added_allowed_per_pass", "EPA/Pass"),
            col("expected_points_added_allowed_per_rush", "EPA/Rush"),
            col("average_depth_of_target_against", "ADoT"),
            col("scramble_pct", "Scramble %"),
            col("interception_pct", "Int %"),
        ],
    },
    StatGroup {
        key: "team_coverage_rates",
        label: "Coverage Rates",
        columns: &[
            col("man_rate", "Man Rate"),
            col("zone_rate", "Zone Rate"),
            col("middle_closed_rate", "Middle Closed Rate"),
            col("middle_open_rate", "Middle Open Rate"),
        ],
    },
    StatGroup {
        key: "team_play_calling",
        label: "Play Calling",
        columns: &[
            col("motion_rate", "Motion Rate"),
            col("play_action_rate", "Play Action Rate"),
            col("airyards_per_att", "Air Yards/Attempt"),
            col("shotgun_rate", "Shotgun Rate"),
            col("nohuddle_rate", "No Huddle Rate"),
        ],
    },
    StatGroup {
        key: "team_coverage_stats_by_position",
        label: "Coverage Stats By Position",
        columns: &[
            col("yards_allowed_wr", "Yards Allowed WR"),
            col("yards_allowed_te", "Yards Allowed TE"),
            col("yards_allowed_rb", "Yards Allowed RB"),
            col("yards_allowed_outside", "Yards Allowed Outside"),
            col("yards_allowed_slot", "Yards Allowed Slot"),
        ],
    },
];

pub const RANKING_GROUPS: &[StatGroup] = &[
    StatGroup {
        key: "team_offense_passing",
        label: "Off. Passing",
        columns: &[
            col("off_pass_yards_rank", "Yds"),
            col("off_pass_tds_rank", "TD"),
            col("off_pass_rating_rank", "Rate"),
        ],
    },
    StatGroup {
        key: "team_offense_rushing",
        label: "Off. Rushing",
        columns: &[
            col("off_rush_yards_rank", "Yds"),
            col("off_rush_tds_rank", "TD"),
            col("off_rush_attempts_rank", "Att"),
        ],
    },
    StatGroup {
        key: "team_offense_receiving",
        label: "Off. Receiving",
        columns: &[
            col("off_receptions_rank", "Rec"),
            col("off_rec_yards_rank", "Yds"),
            col("off_rec_tds_rank", "TD"),
        ],
    },
    StatGroup {
        key: "team_defense_passing",
        label: "Def. Passing",
        columns: &[
            col("def_pass_yards_rank", "Yds"),
            col("def_pass_tds_rank", "TD"),
            col("def_pass_rating_rank", "Rate"),
        ],
    },
    StatGroup {
        key: "team_defense_rushing",
        label: "Def. Rushing",
        columns: &[
            col("def_rush_yards_rank", "Yds"),
            col("def_rush_tds_rank", "TD"),
            col("def_rush_attempts_rank", "Att"),
        ],
    },
    StatGroup {
        key: "team_defense_receiving",
        label: "Def. Receiving",
        columns: &[
            col("def_receptions_rank", "Rec"),
            col("def_rec_yards_rank", "Yds"),
            col("def_rec_tds_rank", "TD"),
            col("def_pass_defended_rank", "PDef"),
        ],
    },
    StatGroup {
        key: "team_advance_offense",
        label: "Adv. Off.",
        columns: &[
            col("off_expected_points_added_per_play_rank", "EPA/Play"),
            col("off_expected_points_added_per_pass_rank", "EPA/Pass"),
            col("off_expected_points_added_per_rush_rank", "EPA/Rush"),
        ],
    },
    StatGroup {
        key: "team_advance_defense",
        label: "Adv. Def.",
        columns: &[
            col("def_expected_points_added_per_play_rank", "EPA/Play"),
            col("def_expected_points_added_allowed_per_pass_rank", "EPA/Pass"),
            col("def_expected_points_added_allowed_per_rush_rank", "EPA/Rush"),
        ],
    },
    StatGroup {
        key: "team_coverage_rates",
        label: "Coverage Rates",
        columns: &[
            col("man_rate_rank", "Man"),
            col("zone_rate_rank", "Zone"),
            col("middle_closed_rate_rank", "Middle Closed"),
            col("middle_open_rate_rank", "Middle Open"),
        ],
    },
    StatGroup {
        key: "team_play_calling",
        label: "Play Calling",
        columns: &[
            col("motion_rate_rank", "Motion"),
            col("play_action_rate_rank", "Play Action"),
            col("shotgun_rate_rank", "Shotgun"),
            col("nohuddle_rate_rank", "No Huddle"),
        ],
    },
    StatGroup {
        key: "team_coverage_stats_by_position",
        label: "Coverage Stats By Position",
        columns: &[
            col("yards_allowed_wr_rank", "Yds Allowed WR"),
            col("yards_allowed_te_rank", "Yds Allowed TE"),
            col("yards_allowed_rb_rank", "Yds Allowed RB"),
            col("yards_allowed_outside_rank", "Yds Allowed Outside"),
            col("yards_allowed_slot_rank", "Yds Allowed Slot"),
        ],
    },
];

/// Looks up a group by key, falling back to the first group.
pub fn group_or_first<'a>(groups: &'a [StatGroup], key: &str) -> Option<&'a StatGroup> {
    groups.iter().find(|g| g.key == key).or_else(|| groups.first())
}

/// English ordinal suffix for a rank: 1 -> "st", 12 -> "th", 23 -> "rd".
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Renders a rank as "5th", or "-" when the team has no rank yet.
pub fn format_rank(rank: Option<f64>) -> String {
    match rank {
        Some(value) if value >= 1.0 => {
            let n = value as u32;
            format!("{}{}", n, ordinal_suffix(n))
        }
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, "st")]
    #[case(2, "nd")]
    #[case(3, "rd")]
    #[case(4, "th")]
    #[case(11, "th")]
    #[case(12, "th")]
    #[case(13, "th")]
    #[case(21, "st")]
    #[case(22, "nd")]
    #[case(32, "nd")]
    #[case(111, "th")]
    fn ordinal_suffixes(#[case] n: u32, #[case] suffix: &str) {
        assert_eq!(ordinal_suffix(n), suffix);
    }

    #[test]
    fn rank_formatting() {
        assert_eq!(format_rank(Some(1.0)), "1st");
        assert_eq!(format_rank(Some(23.0)), "23rd");
        assert_eq!(format_rank(Some(0.0)), "-");
        assert_eq!(format_rank(None), "-");
    }

    #[test]
    fn unknown_position_has_no_columns() {
        assert!(position_columns("K").is_empty());
        assert_eq!(position_columns("QB")[0].key, "completions");
    }

    #[test]
    fn every_team_group_has_a_ranking_counterpart() {
        for group in TEAM_STAT_GROUPS {
            assert!(
                RANKING_GROUPS.iter().any(|r| r.key == group.key),
                "missing ranking group for {}",
                group.key
            );
        }
        assert_eq!(TEAM_ABBREVIATIONS.len(), 32);
    }

    #[test]
    fn group_lookup_falls_back_to_first() {
        let group = group_or_first(TEAM_STAT_GROUPS, "nope").unwrap();
        assert_eq!(group.key, "team_offense_passing");
        let group = group_or_first(TEAM_STAT_GROUPS, "team_play_calling").unwrap();
        assert_eq!(group.label, "Play Calling");
    }
}
