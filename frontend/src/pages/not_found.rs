use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center gap-4 p-12 text-center">
            <h1 class="text-3xl font-bold text-gray-900">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("text-indigo-600", "hover:underline")}>
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
