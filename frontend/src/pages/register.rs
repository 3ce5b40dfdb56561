use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use log::{info, warn};
use shared::dto::auth::RegisterRequest;

use crate::api::auth;
use crate::pages::login::{bind, form_error, INPUT_CLASS, SUBMIT_CLASS};
use crate::Route;

#[function_component(Register)]
pub fn register() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password1 = use_state(String::new);
    let password2 = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password1 = password1.clone();
        let password2 = password2.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password1: password1.to_string(),
                password2: password2.to_string(),
            };

            if let Err(err) = request.validate_form() {
                error.set(form_error(err));
                return;
            }

            loading.set(true);
            error.set(String::new());
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match auth::register(&request).await {
                    Ok(()) => {
                        info!("Registered {}", request.username);
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        warn!("Registration failed: {}", e);
                        error.set(e.user_message());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {"Create an account"}
                </h2>
                <form class="mt-8 space-y-4" onsubmit={onsubmit}>
                    <input name="username" type="text" required=true class={INPUT_CLASS}
                        placeholder="Username" onchange={bind(&username)} />
                    <input name="email" type="email" required=true class={INPUT_CLASS}
                        placeholder="Email address" onchange={bind(&email)} />
                    <input name="password1" type="password" required=true class={INPUT_CLASS}
                        placeholder="Password" onchange={bind(&password1)} />
                    <input name="password2" type="password" required=true class={INPUT_CLASS}
                        placeholder="Confirm password" onchange={bind(&password2)} />

                    if !error.is_empty() {
                        <div class="text-red-500 text-sm text-center">{error.to_string()}</div>
                    }

                    <button type="submit" disabled={*loading} class={SUBMIT_CLASS}>
                        if *loading {
                            {"Creating account..."}
                        } else {
                            {"Register"}
                        }
                    </button>
                    <p class="text-center text-sm text-gray-600">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes={classes!("text-indigo-600", "hover:underline")}>
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
