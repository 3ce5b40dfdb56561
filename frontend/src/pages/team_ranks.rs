use shared::catalog::{format_rank, group_or_first, RANKING_GROUPS};
use shared::dto::team::TeamRanksDto;
use shared::view::sort::{sort_rows, Extractors};
use yew::prelude::*;

use crate::api::teams::team_ranks_key;
use crate::components::sortable_header::SortableHeader;
use crate::config::Config;
use crate::hooks::{use_cached_query, use_url_filters, use_url_sort};
use crate::pages::team_stats::GroupTabs;

const CELL: &str = "px-3 py-2 text-sm text-gray-900 whitespace-nowrap";

/// League rank per stat, 1st being the best.
#[function_component(TeamRanks)]
pub fn team_ranks() -> Html {
    let filters = use_url_filters(Config::TEAM_TABLE_DEFAULTS);
    let sort = use_url_sort();
    let ranks = use_cached_query::<Vec<TeamRanksDto>>(Some(team_ranks_key()));

    let Some(group) = group_or_first(RANKING_GROUPS, filters.filters.get("table")) else {
        return html! {};
    };

    let rows = ranks
        .data
        .as_ref()
        .map(|teams| sort_rows(teams, sort.sort.as_ref(), &Extractors::new()))
        .unwrap_or_default();
    let colspan = (1 + group.columns.len()).to_string();

    html! {
        <div class="container mx-auto flex flex-col gap-6 p-8">
            <h1 class="text-2xl font-bold text-gray-900">{"Team Rankings"}</h1>
            <GroupTabs groups={RANKING_GROUPS} active={group.key} on_select={filters.set_filter.clone()} />
            <div class="w-full overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <SortableHeader label="Team" column="team" sort={sort.sort.clone()} on_click={sort.on_header_click.clone()} />
                            {for group.columns.iter().map(|column| html! {
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
                        if !rows.is_empty() {
                            {for rows.iter().map(|team| html! {
                                <tr key={team.id.to_string()} class="odd:bg-white even:bg-gray-50">
                                    <td class={CELL}>{&team.full_name}</td>
                                    {for group.columns.iter().map(|column| html! {
                                        <td class={CELL}>{format_rank(team.rank(column.key).value())}</td>
                                    })}
                                </tr>
                            })}
                        } else if ranks.loading {
                            <tr><td colspan={colspan} class="p-12 text-center text-gray-500">{"Loading rankings..."}</td></tr>
                        } else if let Some(error) = &ranks.error {
                            <tr><td colspan={colspan} class="p-12 text-center text-red-600">{error.clone()}</td></tr>
                        } else {
                            <tr><td colspan={colspan} class="p-12 text-center text-gray-500">{"No results found."}</td></tr>
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
