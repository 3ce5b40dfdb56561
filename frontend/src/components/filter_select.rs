use shared::catalog::FilterOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub label: AttrValue,
    /// Query parameter this select writes.
    pub name: &'static str,
    pub value: AttrValue,
    pub options: &'static [FilterOption],
    pub on_change: Callback<(String, String)>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let name = props.name;
        props.on_change.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            (name.to_string(), select.value())
        })
    };

    html! {
        <label class="flex flex-col text-xs font-medium text-gray-600">
            {props.label.clone()}
            <select
                name={props.name}
                {onchange}
                class="mt-1 block w-full rounded-md border border-gray-300 bg-white px-2 py-1 text-sm text-gray-900 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
            >
                {for props.options.iter().map(|option| html! {
                    <option value={option.value} selected={option.value == props.value.as_str()}>
                        {option.label}
                    </option>
                })}
            </select>
        </label>
    }
}
