use shared::view::pagination::PageStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsSummaryProps {
    pub stats: PageStats,
}

#[function_component(StatsSummary)]
pub fn stats_summary(props: &StatsSummaryProps) -> Html {
    let stats = props.stats;
    html! {
        <div class="flex flex-wrap gap-6 text-sm text-gray-600">
            <div>
                <span class="font-semibold text-gray-900">{stats.total_count}</span>
                {" total entries"}
            </div>
            <div>
                <span class="font-semibold text-gray-900">{stats.total_pages}</span>
                {" pages"}
            </div>
            <div>
                {"Showing "}
                <span class="font-semibold text-gray-900">{stats.loaded_count}</span>
                {" of "}
                <span class="font-semibold text-gray-900">{stats.total_count}</span>
            </div>
        </div>
    }
}
