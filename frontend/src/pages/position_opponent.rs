use shared::catalog::{
    position_columns, FilterOption, LOCATIONS, POSITIONS, SEASON_TYPES, SEASON_YEARS,
    TEAM_ABBREVIATIONS,
};
use shared::dto::game_log::{game_log_extractors, PlayerGameLogDto, GAME_LOG_FILTER_DEFAULTS};
use shared::view::sort::sort_rows;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::filter_select::FilterSelect;
use crate::components::sortable_header::SortableHeader;
use crate::components::stats_summary::StatsSummary;
use crate::components::upcoming_games::UpcomingGames;
use crate::hooks::{use_paged_game_logs, use_url_filters, use_url_sort};
use crate::Route;

const CELL: &str = "px-3 py-2 text-sm text-gray-900 whitespace-nowrap";

fn score(log: &PlayerGameLogDto) -> String {
    match (log.game.home_score, log.game.away_score) {
        (Some(home), Some(away)) => format!("{} - {}", home, away),
        _ => "-".to_string(),
    }
}

/// How one position has fared against one opponent, game by game.
#[function_component(PositionOpponent)]
pub fn position_opponent() -> Html {
    let filters = use_url_filters(GAME_LOG_FILTER_DEFAULTS);
    let sort = use_url_sort();
    let logs = use_paged_game_logs(filters.filters.clone());
    let extractors = use_memo((), |_| game_log_extractors());

    let columns = position_columns(filters.filters.get("position"));
    let rows = sort_rows(&logs.rows, sort.sort.as_ref(), &extractors);
    let colspan = (6 + columns.len()).to_string();

    let select = |label: &'static str, name: &'static str, options: &'static [FilterOption]| {
        html! {
            <FilterSelect
                label={label}
                name={name}
                value={filters.filters.get(name).to_string()}
                options={options}
                on_change={filters.set_filter.clone()}
            />
        }
    };

    let on_load_more = logs.fetch_next_page.reform(|_: MouseEvent| ());
    let on_reset = filters.reset_filters.reform(|_: MouseEvent| ());

    let body = if logs.loading {
        html! {
            <tr><td colspan={colspan} class="p-12 text-center text-gray-500">{"Loading player data..."}</td></tr>
        }
    } else if rows.is_empty() {
        html! {
            <tr>
                <td colspan={colspan} class="p-12 text-center text-gray-500">
                    if let Some(error) = &logs.error {
                        <span class="text-red-600">{error.clone()}</span>
                    } else {
                        {"No results found."}
                    }
                </td>
            </tr>
        }
    } else {
        html! {
            <>
                {for rows.iter().map(|log| html! {
                    <tr key={log.id.to_string()} class="odd:bg-white even:bg-gray-50 hover:bg-emerald-50">
                        <td class={CELL}>{log.game.week.map(|w| w.to_string()).unwrap_or_default()}</td>
                        <td class={CELL}>
                            <Link<Route>
                                to={Route::Player { id: log.player.id, slug: log.player.slug.clone() }}
                                classes={classes!("text-indigo-600", "hover:underline")}
                            >
                                {&log.player.full_name}
                            </Link<Route>>
                        </td>
                        <td class={CELL}>{&log.player.position}</td>
                        <td class={CELL}>{log.team()}</td>
                        <td class={CELL}>{&log.game.short_name}</td>
                        <td class={CELL}>{score(log)}</td>
                        {for columns.iter().map(|column| html! {
                            <td class={CELL}>{log.stat(column.key).to_string()}</td>
                        })}
                    </tr>
                })}
            </>
        }
    };

    html! {
        <>
            <UpcomingGames />
            <div class="bg-gray-50 border-b border-gray-200">
                <div class="container mx-auto flex flex-col gap-6 px-8 py-6">
                    <div class="flex flex-wrap items-end gap-4">
                        {select("Season", "season_year", SEASON_YEARS)}
                        {select("Season Type", "season_type", SEASON_TYPES)}
                        {select("Location", "location", LOCATIONS)}
                        {select("Opponent", "opponent", TEAM_ABBREVIATIONS)}
                        {select("Position", "position", POSITIONS)}
                        <button onclick={on_reset} class="text-sm text-gray-500 hover:text-gray-700">
                            {"Reset"}
                        </button>
                    </div>
                    if !logs.loading && logs.stats.total_count > 0 {
                        <StatsSummary stats={logs.stats} />
                    }
                </div>
            </div>

            <div class="container mx-auto flex flex-col p-8">
                <div class="w-full overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <SortableHeader label="Week" column="week" sort={sort.sort.clone()} on_click={sort.on_header_click.clone()} />
                                <SortableHeader label="Player" column="player" sort={sort.sort.clone()} on_click={sort.on_header_click.clone()} />
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Position"}</th>
                                <SortableHeader label="Team" column="team" sort={sort.sort.clone()} on_click={sort.on_header_click.clone()} />
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Matchup"}</th>
                                <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Score"}</th>
                                {for columns.iter().map(|column| html! {
                                    <SortableHeader
                                        label={column.label}
                                        column={column.key}
                                        sort={sort.sort.clone()}
                                        on_click={sort.on_header_click.clone()}
                                    />
                                })}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {body}
                        </tbody>
                    </table>
                </div>

                if !rows.is_empty() {
                    if let Some(error) = &logs.error {
                        <div class="mt-4 text-center text-sm text-red-600">{error.clone()}</div>
                    }
                }

                if logs.has_next_page {
                    <div class="flex justify-center mt-12 mb-8">
                        <button
                            onclick={on_load_more}
                            disabled={logs.fetching_next_page}
                            class="rounded-full border border-gray-300 bg-white px-8 py-3 text-sm font-bold text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                        >
                            if logs.fetching_next_page {
                                {"Loading more..."}
                            } else {
                                {"Load More Games"}
                            }
                        </button>
                    </div>
                }
            </div>
        </>
    }
}
