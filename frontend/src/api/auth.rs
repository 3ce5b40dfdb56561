use log::debug;
use shared::dto::auth::{LoginRequest, RegisterRequest, UserDto};
use shared::error::session_outcome;
use shared::FetchError;

use crate::api::client;

pub const CSRF_COOKIE_ENDPOINT: &str = "/auth/csrf-cookie";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/auth/user/me";

/// Asks the backend to set the `csrftoken` cookie before the first POST.
pub async fn ensure_csrf_cookie() -> Result<(), FetchError> {
    client::send(client::build(client::get(CSRF_COOKIE_ENDPOINT))?).await?;
    Ok(())
}

/// Sends a form POST. Any error status, including 401 for bad credentials,
/// is reported with the body's message so the form can show it.
async fn post_form<B: serde::Serialize>(path: &str, body: &B) -> Result<(), FetchError> {
    let request = client::post(path)
        .json(body)
        .map_err(|e| FetchError::Network(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: response.status(),
        message: client::error_message(&response).await,
    })
}

pub async fn login(request: &LoginRequest) -> Result<(), FetchError> {
    debug!("Attempting login for user: {}", request.email);
    ensure_csrf_cookie().await?;
    post_form(LOGIN_ENDPOINT, request).await?;
    debug!("Login successful for user: {}", request.email);
    Ok(())
}

pub async fn register(request: &RegisterRequest) -> Result<(), FetchError> {
    debug!("Registering new user: {}", request.email);
    ensure_csrf_cookie().await?;
    post_form(SIGNUP_ENDPOINT, request).await
}

pub async fn logout() -> Result<(), FetchError> {
    debug!("Attempting logout");
    client::send(client::build(client::post(LOGOUT_ENDPOINT))?).await?;
    debug!("Logout successful");
    Ok(())
}

/// The signed-in user, or `None` when the session is missing or expired.
/// Other failures are retried and then reported as errors.
pub async fn current_user() -> Result<Option<UserDto>, FetchError> {
    let result = client::with_retry(CURRENT_USER_ENDPOINT, || async {
        client::fetch_json::<UserDto>(client::build(client::get(CURRENT_USER_ENDPOINT))?).await
    })
    .await;

    let session = session_outcome(result)?;
    if session.is_none() {
        debug!("No active session");
    }
    Ok(session)
}
