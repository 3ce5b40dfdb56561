use shared::catalog::position_columns;
use shared::dto::player::{GameLineDto, PlayerStatsDto};
use shared::view::sort::{sort_rows, Extractors, SortConfig};
use yew::prelude::*;

use crate::api::players::player_stats_key;
use crate::components::upcoming_games::UpcomingGames;
use crate::hooks::use_cached_query;

const CELL: &str = "px-3 py-2 text-sm text-gray-900 whitespace-nowrap text-center";
const HEADER: &str = "px-3 py-2 text-center text-xs font-medium text-gray-500 uppercase tracking-wider whitespace-nowrap";

#[derive(Properties, PartialEq)]
pub struct PlayerPageProps {
    pub id: i64,
    pub slug: String,
}

fn matchup(line: &GameLineDto, team: &str) -> String {
    match line.game.opponent_of(team) {
        Some(opponent) if line.game.is_home(team) => format!("vs {}", opponent),
        Some(opponent) => format!("@ {}", opponent),
        None => line.game.short_name.clone(),
    }
}

#[function_component(PlayerPage)]
pub fn player_page(props: &PlayerPageProps) -> Html {
    let player = use_cached_query::<PlayerStatsDto>(Some(player_stats_key(props.id, &props.slug)));

    let body = match (&player.data, &player.error) {
        (Some(player), _) => {
            let team = player.team_abbreviation();
            let columns = position_columns(&player.position);
            let by_date = SortConfig::asc("date");
            let games = sort_rows(&player.stats, Some(&by_date), &Extractors::new());
            let team_name = player.team.as_ref().map(|t| t.full_name.as_str()).unwrap_or_default();

            html! {
                <div class="rounded-xl bg-white p-6 shadow">
                    <div class="mb-6 border-b border-gray-200 pb-4">
                        <h1 class="text-2xl font-extrabold text-gray-900">{&player.full_name}</h1>
                        <p class="mt-1 text-gray-600">
                            {format!("{} - {} - #{}", team_name, player.position, player.jersey)}
                        </p>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class={HEADER}>{"Date"}</th>
                                    <th class={HEADER}>{"Matchup"}</th>
                                    <th class={HEADER}>{"Score"}</th>
                                    {for columns.iter().map(|column| html! {
                                        <th class={HEADER}>{column.label}</th>
                                    })}
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {for games.iter().map(|line| html! {
                                    <tr key={line.id.to_string()} class="odd:bg-white even:bg-gray-50">
                                        <td class={CELL}>{&line.game.date}</td>
                                        <td class={CELL}>{matchup(line, team)}</td>
                                        <td class={CELL}>{line.game.score_for(team).unwrap_or_else(|| "-".to_string())}</td>
                                        {for columns.iter().map(|column| html! {
                                            <td class={CELL}>{line.stat(column.key).to_string()}</td>
                                        })}
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        }
        (None, Some(error)) => html! {
            <div class="p-12 text-center text-red-600">{error.clone()}</div>
        },
        (None, None) => html! {
            <div class="p-12 text-center text-gray-500">{"Loading player..."}</div>
        },
    };

    html! {
        <div class="flex flex-col gap-4 p-4 sm:p-8">
            <UpcomingGames />
            {body}
        </div>
    }
}
