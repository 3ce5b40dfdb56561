use shared::view::sort::{SortConfig, SortDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SortableHeaderProps {
    pub label: AttrValue,
    pub column: AttrValue,
    pub sort: Option<SortConfig>,
    pub on_click: Callback<String>,
}

/// Table header cell that sorts by `column` when clicked.
#[function_component(SortableHeader)]
pub fn sortable_header(props: &SortableHeaderProps) -> Html {
    let indicator = match &props.sort {
        Some(sort) if sort.key == props.column.as_str() => match sort.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        },
        _ => "",
    };

    let onclick = {
        let column = props.column.to_string();
        props.on_click.reform(move |_: MouseEvent| column.clone())
    };

    html! {
        <th class="px-3 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider whitespace-nowrap">
            <button {onclick} class="flex items-center gap-1 hover:text-gray-700">
                {props.label.clone()}
                <span class="w-3">{indicator}</span>
            </button>
        </th>
    }
}
