use yew::prelude::*;
use yew_router::prelude::*;
use crate::auth::use_auth;
use crate::components::player_search::PlayerSearch;
use crate::Route;

fn nav_links() -> [(Route, &'static str); 3] {
    [
        (Route::PositionOpponent, "Position vs Opponent"),
        (Route::TeamStats, "Team Stats"),
        (Route::TeamRanks, "Team Rankings"),
    ]
}

fn link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("bg-white/20", "text-white")
        } else {
            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().unwrap();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let is_menu_open = use_state(|| false);

    let on_logout_click = {
        let auth = auth.clone();
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            auth.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let on_retry = auth.refresh.reform(|_: MouseEvent| ());
    // The auth forms show this error themselves.
    let banner_error = auth
        .state
        .error
        .clone()
        .filter(|_| !matches!(current_route, Route::Login | Route::Register));

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };

    let is_active = |route: &Route| {
        *route == current_route
            || (*route == Route::PositionOpponent && current_route == Route::Home)
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center", "gap-4")}>
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Home} classes={classes!("flex", "items-baseline")}>
                            <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>
                                {"NFL Stats"}
                            </span>
                        </Link<Route>>
                        <div class={classes!("hidden", "md:flex", "space-x-2")}>
                            {for nav_links().iter().map(|(route, label)| html! {
                                <Link<Route> to={route.clone()} classes={link_classes(is_active(route))}>
                                    {*label}
                                </Link<Route>>
                            })}
                        </div>
                    </div>

                    <div class={classes!("flex", "items-center", "space-x-4")}>
                        <PlayerSearch />
                        if let Some(user) = &auth.state.user {
                            <div class={classes!("relative")}>
                                <button
                                    onclick={toggle_menu}
                                    class={classes!(
                                        "inline-flex", "items-center", "px-3", "py-2", "rounded-md",
                                        "text-sm", "font-medium", "hover:bg-white/10"
                                    )}
                                >
                                    {user.display_name()}
                                    <span class={classes!("ml-1", "text-xs")}>{"▾"}</span>
                                </button>
                                if *is_menu_open {
                                    <div class={classes!(
                                        "absolute", "right-0", "mt-2", "w-48", "rounded-md", "bg-white",
                                        "py-1", "text-sm", "text-gray-900", "shadow-lg"
                                    )}>
                                        <div class={classes!("px-4", "py-2", "text-xs", "text-gray-500")}>
                                            {&user.email}
                                        </div>
                                        <button
                                            onclick={on_logout_click}
                                            class={classes!("block", "w-full", "px-4", "py-2", "text-left", "hover:bg-gray-100")}
                                        >
                                            {"Logout"}
                                        </button>
                                    </div>
                                }
                            </div>
                        } else {
                            <Link<Route> to={Route::Login} classes={link_classes(current_route == Route::Login)}>
                                {"Login"}
                            </Link<Route>>
                            <Link<Route> to={Route::Register} classes={link_classes(current_route == Route::Register)}>
                                {"Register"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
            if let Some(error) = banner_error {
                <div class={classes!("bg-red-600", "text-sm", "text-white")}>
                    <div class={classes!(
                        "max-w-7xl", "mx-auto", "px-4", "py-2", "flex", "items-center",
                        "justify-between", "gap-4"
                    )}>
                        <span>{error}</span>
                        <button
                            onclick={on_retry}
                            class={classes!("rounded", "px-2", "py-1", "font-medium", "hover:bg-white/10")}
                        >
                            {"Retry"}
                        </button>
                    </div>
                </div>
            }
        </nav>
    }
}
