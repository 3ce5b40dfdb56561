use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::auth::{use_auth, AuthProvider};
use crate::components::nav::Nav;
use crate::components::footer::Footer;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages {
    pub mod login;
    pub mod not_found;
    pub mod player;
    pub mod position_opponent;
    pub mod register;
    pub mod team_ranks;
    pub mod team_stats;
}

use pages::{
    login::Login, not_found::NotFound, player::PlayerPage, position_opponent::PositionOpponent,
    register::Register, team_ranks::TeamRanks, team_stats::TeamStats,
};

#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/position-opponent")]
    PositionOpponent,
    #[at("/team-stats")]
    TeamStats,
    #[at("/team-ranks")]
    TeamRanks,
    #[at("/player/:id/:slug")]
    Player { id: i64, slug: String },
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen flex flex-col bg-gray-50">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Login and registration only make sense while signed out.
#[function_component(PublicOnlyRoute)]
pub fn public_only_route(props: &Props) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().unwrap();
    let is_authenticated = auth.state.is_authenticated();

    use_effect_with(is_authenticated, move |is_auth| {
        if *is_auth {
            debug!("Already signed in, leaving auth page");
            navigator.push(&Route::Home);
        }
        || ()
    });

    if is_authenticated {
        html! {}
    } else {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home | Route::PositionOpponent => html! { <PositionOpponent /> },
        Route::TeamStats => html! { <TeamStats /> },
        Route::TeamRanks => html! { <TeamRanks /> },
        Route::Player { id, slug } => {
            debug!("Rendering player page for {} ({})", slug, id);
            html! { <PlayerPage id={id} slug={slug} /> }
        }
        Route::Login => html! {
            <PublicOnlyRoute>
                <Login />
            </PublicOnlyRoute>
        },
        Route::Register => html! {
            <PublicOnlyRoute>
                <Register />
            </PublicOnlyRoute>
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application, API at {:?}", config::Config::api_base_url());
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
