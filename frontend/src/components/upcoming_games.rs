use chrono::{DateTime, Local};
use shared::dto::game::GameDto;
use yew::prelude::*;

use crate::api::events::upcoming_games_key;
use crate::hooks::use_cached_query;

/// Kickoff in the viewer's time zone, e.g. "Sep 8, 1:00 PM".
/// Anything that is not an RFC 3339 timestamp is shown as sent.
pub fn format_kickoff(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|kickoff| kickoff.with_timezone(&Local).format("%b %-d, %-I:%M %p").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[function_component(UpcomingGames)]
pub fn upcoming_games() -> Html {
    let games = use_cached_query::<Vec<GameDto>>(Some(upcoming_games_key()));

    let Some(list) = games.data.as_ref() else {
        return html! {};
    };

    html! {
        <div class="container mx-auto flex flex-wrap gap-4 px-8 py-4">
            {for list.iter().map(|game| html! {
                <div key={game.id.to_string()} class="w-[120px] rounded-sm border border-gray-200 p-2 text-center text-xs">
                    <div>
                        {format!("{} vs {}", game.home_team.abbreviation, game.away_team.abbreviation)}
                    </div>
                    <div class="text-gray-500">{format_kickoff(&game.date)}</div>
                    {for game.away_team.total.iter().map(|line| html! {
                        <div>{line.open_line.to_string()}</div>
                    })}
                </div>
            })}
        </div>
    }
}
