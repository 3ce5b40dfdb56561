//! Request builders and response handling shared by every endpoint.
//!
//! The backend authenticates with a session cookie, so every request carries
//! credentials. Unsafe methods also send the CSRF token from the `csrftoken`
//! cookie.

use std::future::Future;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use shared::dto::common::ErrorResponse;
use shared::retry::{retry_delay_ms, should_retry};
use shared::FetchError;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, RequestCredentials};

use crate::api::api_url;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Finds the CSRF token in a `document.cookie` string.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|token| !token.is_empty())
}

fn csrf_token() -> Option<String> {
    let cookies = gloo::utils::document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default();
    csrf_token_from_cookies(&cookies)
}

/// GET with the session cookie attached.
pub fn get(path: &str) -> RequestBuilder {
    Request::get(&api_url(path)).credentials(RequestCredentials::Include)
}

/// POST with the session cookie and CSRF header attached.
pub fn post(path: &str) -> RequestBuilder {
    let req = Request::post(&api_url(path)).credentials(RequestCredentials::Include);
    match csrf_token() {
        Some(token) => req.header(CSRF_HEADER, &token),
        None => {
            debug!("No CSRF cookie present for POST {}", path);
            req
        }
    }
}

pub fn build(builder: RequestBuilder) -> Result<Request, FetchError> {
    builder
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to build request: {}", e)))
}

/// The body's error message, or the raw body when it is not an error object.
pub async fn error_message(response: &Response) -> String {
    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|error| error.message())
            .unwrap_or(body),
        Err(_) => response.status_text(),
    }
}

/// Error for a non-2xx response. 401 and 403 become `Unauthenticated`.
pub async fn error_from_response(response: &Response) -> FetchError {
    FetchError::from_status(response.status(), error_message(response).await)
}

pub async fn send(request: Request) -> Result<Response, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }
    Ok(response)
}

pub async fn fetch_text(request: Request) -> Result<String, FetchError> {
    let response = send(request).await?;
    response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_json<T: DeserializeOwned>(request: Request) -> Result<T, FetchError> {
    let body = fetch_text(request).await?;
    decode(&body)
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Runs `attempt` until it succeeds or the retry policy gives up.
pub async fn with_retry<F, Fut, T>(label: &str, mut attempt: F) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut failures = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                failures += 1;
                if !should_retry(failures, &err) {
                    return Err(err);
                }
                let delay = retry_delay_ms(failures);
                warn!("{} failed ({}), retrying in {} ms", label, err, delay);
                TimeoutFuture::new(delay).await;
            }
        }
    }
}

/// GET `path` and return the raw body, retrying transient failures.
pub async fn get_text_with_retry(path: &str) -> Result<String, FetchError> {
    with_retry(path, || async move { fetch_text(build(get(path))?).await }).await
}
