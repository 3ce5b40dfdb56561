use shared::catalog::{group_or_first, StatGroup, TEAM_STAT_GROUPS};
use shared::dto::team::{TeamGroupRow, TeamStatsDto};
use shared::view::sort::{sort_rows, Extractors};
use yew::prelude::*;

use crate::api::cache;
use crate::api::teams::{team_stats_key, TEAM_RANKS_ENDPOINT};
use crate::components::sortable_header::SortableHeader;
use crate::config::Config;
use crate::hooks::{use_cached_query, use_url_filters, use_url_sort};

const CELL: &str = "px-3 py-2 text-sm text-gray-900 whitespace-nowrap";

#[derive(Properties, PartialEq)]
pub struct GroupTabsProps {
    pub groups: &'static [StatGroup],
    pub active: AttrValue,
    pub on_select: Callback<(String, String)>,
}

/// One tab per stat group; the active group lives in the `table` filter.
#[function_component(GroupTabs)]
pub fn group_tabs(props: &GroupTabsProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2">
            {for props.groups.iter().map(|group| {
                let active = group.key == props.active.as_str();
                let onclick = props
                    .on_select
                    .reform(move |_: MouseEvent| ("table".to_string(), group.key.to_string()));
                html! {
                    <button
                        {onclick}
                        class={classes!(
                            "px-3", "py-1.5", "rounded-md", "text-sm", "font-medium",
                            if active {
                                classes!("bg-blue-600", "text-white")
                            } else {
                                classes!("bg-white", "text-gray-700", "border", "border-gray-300", "hover:bg-gray-50")
                            }
                        )}
                    >
                        {group.label}
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(TeamStats)]
pub fn team_stats() -> Html {
    let filters = use_url_filters(Config::TEAM_TABLE_DEFAULTS);
    let sort = use_url_sort();
    let teams = use_cached_query::<Vec<TeamStatsDto>>(Some(team_stats_key()));

    let Some(group) = group_or_first(TEAM_STAT_GROUPS, filters.filters.get("table")) else {
        return html! {};
    };

    let rows: Vec<TeamGroupRow> = teams
        .data
        .as_ref()
        .map(|teams| teams.iter().map(|team| TeamGroupRow::from_team(team, group.key)).collect())
        .unwrap_or_default();
    let rows = sort_rows(&rows, sort.sort.as_ref(), &Extractors::new());
    let colspan = (1 + group.columns.len()).to_string();
    let on_refresh = {
        let refetch = teams.refetch.clone();
        Callback::from(move |_: MouseEvent| {
            // Rankings come from the same stats, so they are refetched too.
            cache::invalidate_endpoint(TEAM_RANKS_ENDPOINT);
            refetch.emit(());
        })
    };

    html! {
        <div class="container mx-auto flex flex-col gap-6 p-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Team Stats"}</h1>
                <button
                    onclick={on_refresh}
                    disabled={teams.loading}
                    class="text-sm text-gray-500 hover:text-gray-700 disabled:opacity-50"
                >
                    {"Refresh"}
                </button>
            </div>
            <GroupTabs groups={TEAM_STAT_GROUPS} active={group.key} on_select={filters.set_filter.clone()} />
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
                            {for rows.iter().map(|row| html! {
                                <tr key={row.team_id.to_string()} class="odd:bg-white even:bg-gray-50">
                                    <td class={CELL}>{&row.team}</td>
                                    {for group.columns.iter().map(|column| html! {
                                        <td class={CELL}>{row.stats.get(column.key).to_string()}</td>
                                    })}
                                </tr>
                            })}
                        } else if teams.loading {
                            <tr><td colspan={colspan} class="p-12 text-center text-gray-500">{"Loading team stats..."}</td></tr>
                        } else if let Some(error) = &teams.error {
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
