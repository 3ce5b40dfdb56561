pub mod filter_select;
pub mod footer;
pub mod nav;
pub mod player_search;
pub mod sortable_header;
pub mod stats_summary;
pub mod upcoming_games;
