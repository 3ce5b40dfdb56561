use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col sm:flex-row justify-between items-center gap-2 text-sm text-blue-100">
                    <span class="font-semibold text-white">{"NFL Stats"}</span>
                    <span>{"Player game logs, team stats and league rankings."}</span>
                    <span class="font-mono text-xs text-blue-200">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
                </div>
            </div>
        </footer>
    }
}
