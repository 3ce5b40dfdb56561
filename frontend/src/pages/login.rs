use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;
use shared::dto::auth::LoginRequest;
use shared::SharedError;

use crate::auth::use_auth;
use crate::Route;

pub(crate) const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm";
pub(crate) const SUBMIT_CLASS: &str = "group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50";

/// Message for a form that failed local validation.
pub(crate) fn form_error(err: SharedError) -> String {
    match err {
        SharedError::Validation(message) => message,
    }
}

pub(crate) fn bind(field: &UseStateHandle<String>) -> Callback<Event> {
    let field = field.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let auth = use_auth();
    let loading = auth.state.loading;

    // Server-side failures arrive through the auth state.
    {
        let error = error.clone();
        use_effect_with(auth.state.error.clone(), move |auth_error| {
            if let Some(err) = auth_error {
                error.set(err.clone());
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            };

            if let Err(err) = request.validate_form() {
                error.set(form_error(err));
                return;
            }

            debug!("Submitting login for {}", request.email);
            error.set(String::new());
            auth.login.emit(request);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        {"Sign in to your account"}
                    </h2>
                </div>
                <form class="mt-8 space-y-4" onsubmit={onsubmit}>
                    <div>
                        <label for="email" class="sr-only">{"Email address"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required=true
                            class={INPUT_CLASS}
                            placeholder="Email address"
                            onchange={bind(&email)}
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">{"Password"}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required=true
                            class={INPUT_CLASS}
                            placeholder="Password"
                            onchange={bind(&password)}
                        />
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-500 text-sm text-center">
                            {error.to_string()}
                        </div>
                    }

                    <button type="submit" disabled={loading} class={SUBMIT_CLASS}>
                        if loading {
                            {"Signing in..."}
                        } else {
                            {"Sign in"}
                        }
                    </button>
                    <p class="text-center text-sm text-gray-600">
                        {"No account yet? "}
                        <Link<Route> to={Route::Register} classes={classes!("text-indigo-600", "hover:underline")}>
                            {"Register"}
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
