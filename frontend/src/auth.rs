use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Interval;
use log::{debug, error, warn};
use shared::dto::auth::{LoginRequest, UserDto};
use shared::FetchError;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::{auth, cache};
use crate::config::Config;

const USER_STORAGE_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub loading: bool,
    pub error: Option<String>,
    pub refresh_active: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    SignedIn(UserDto),
    LoginError(String),
    LogoutStarted,
    SignedOut,
    /// The session cookie is no longer accepted.
    SessionExpired,
    SetError(Option<String>),
}

fn forget_user() {
    LocalStorage::delete(USER_STORAGE_KEY);
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted | AuthAction::LogoutStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::SignedIn(user) => {
                if let Err(e) = LocalStorage::set(USER_STORAGE_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    loading: false,
                    error: None,
                    refresh_active: true,
                })
            }
            AuthAction::LoginError(error) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(error),
                refresh_active: false,
            }),
            AuthAction::SignedOut => {
                forget_user();
                Rc::new(Self::default())
            }
            AuthAction::SessionExpired => {
                forget_user();
                let error = self
                    .is_authenticated()
                    .then(|| "Session expired. Please log in again.".to_string());
                Rc::new(Self {
                    user: None,
                    loading: false,
                    error,
                    refresh_active: false,
                })
            }
            AuthAction::SetError(error) => Rc::new(Self {
                error,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
    /// Checks the session again, e.g. after a failed check.
    pub refresh: Callback<()>,
}

/// What a session check means for the auth state. A failure other than
/// 401/403 keeps the user and reports the error.
pub fn session_action(result: Result<Option<UserDto>, FetchError>) -> AuthAction {
    match result {
        Ok(Some(user)) => AuthAction::SignedIn(user),
        Ok(None) => AuthAction::SessionExpired,
        Err(e) => {
            error!("Failed to refresh current user: {}", e);
            AuthAction::SetError(Some(e.user_message()))
        }
    }
}

fn check_session(auth: UseReducerHandle<AuthState>) {
    spawn_local(async move {
        auth.dispatch(session_action(auth::current_user().await));
    });
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let user: Option<UserDto> = LocalStorage::get(USER_STORAGE_KEY).ok();
    let auth = use_reducer_eq(move || AuthState {
        refresh_active: user.is_some(),
        user,
        ..Default::default()
    });

    // The stored user is only a hint until the server confirms the session.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            check_session(auth);
            || ()
        });
    }

    {
        let auth = auth.clone();
        use_effect_with(auth.refresh_active, move |refresh_active| {
            let interval = refresh_active.then(|| {
                Interval::new(Config::SESSION_REFRESH_MS, move || check_session(auth.clone()))
            });
            move || drop(interval)
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |request: LoginRequest| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);

                if let Err(e) = auth::login(&request).await {
                    warn!("Login failed: {}", e);
                    auth.dispatch(AuthAction::LoginError(e.user_message()));
                    return;
                }

                match auth::current_user().await {
                    Ok(Some(user)) => auth.dispatch(AuthAction::SignedIn(user)),
                    Ok(None) => auth.dispatch(AuthAction::LoginError(
                        "Signed in, but the session was not accepted".to_string(),
                    )),
                    Err(e) => auth.dispatch(AuthAction::LoginError(e.user_message())),
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LogoutStarted);

                if let Err(e) = auth::logout().await {
                    warn!("Logout request failed: {}", e);
                }
                debug!("Clearing request cache: {:?}", cache::get_cache_stats());
                cache::clear_all();
                auth.dispatch(AuthAction::SignedOut);
            });
        })
    };

    let refresh = {
        let auth = auth.clone();
        Callback::from(move |_: ()| check_session(auth.clone()))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        refresh,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}
