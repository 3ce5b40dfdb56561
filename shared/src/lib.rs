pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod game;
    pub mod game_log;
    pub mod page;
    pub mod player;
    pub mod stat;
    pub mod team;
}

pub mod cache;
pub mod catalog;
pub mod error;
pub mod retry;
pub mod view;

// Re-export commonly used items
pub use error::{FetchError, Result, SharedError};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, RegisterRequest, UserDto},
    common::ErrorResponse,
    game::{EventsQuery, GameDto},
    game_log::PlayerGameLogDto,
    page::Page,
    player::{GameLineDto, PlayerListResponse, PlayerStatsDto, PlayerSummaryDto},
    stat::{StatLine, StatNumber},
    team::{TeamDto, TeamGroupRow, TeamRanksDto, TeamStatsDto},
};

pub use cache::{CacheLookup, QueryCache, QueryKey};
