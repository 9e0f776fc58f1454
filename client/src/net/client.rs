//! Shared HTTP client used by every service module.
//!
//! Client-side (hydrate): real `fetch` calls via `gloo-net`, always with
//! `credentials: include` so the `HttpOnly` session cookie travels along.
//! Server-side (SSR): requests fail fast with `ApiError::Connection` since the
//! session lives in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes an `ApiError`. A 401 also fires the
//! registered unauthorized handler (session expiry → logout + redirect),
//! except for requests that opt out via `RequestOptions::silent_unauthorized`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config;

/// HTTP verbs used by the service layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Per-request behavior switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Do not trigger the session-expiry handler on 401.
    pub silent_unauthorized: bool,
}

impl RequestOptions {
    pub const SILENT: RequestOptions = RequestOptions { silent_unauthorized: true };
}

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback fired when an authenticated request gets a 401.
pub fn set_unauthorized_handler(handler: Rc<dyn Fn()>) {
    UNAUTHORIZED_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
}

pub fn clear_unauthorized_handler() {
    UNAUTHORIZED_HANDLER.with(|slot| slot.borrow_mut().take());
}

fn notify_unauthorized() {
    // Clone out first so the handler may re-register without a borrow conflict.
    let handler = UNAUTHORIZED_HANDLER.with(|slot| slot.borrow().clone());
    if let Some(handler) = handler {
        handler();
    }
}

/// Absolute URL for an API path.
pub fn endpoint(path: &str) -> String {
    join_url(config::api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Append non-empty query parameters to `path`.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_owned()
    }
}

/// Turn a raw status + body into success or a classified error.
pub(crate) fn check_status(status: u16, body: &str, options: RequestOptions) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let err = ApiError::from_status(status, body);
    if err.is_unauthorized() && !options.silent_unauthorized {
        notify_unauthorized();
    }
    Err(err)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // Some endpoints answer 204 or an empty 200; treat that as JSON `null`.
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A body that cannot be read is a transport failure, not an empty reply.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn read_body<E: std::fmt::Display>(method: HttpMethod, path: &str, read: Result<String, E>) -> Result<String, ApiError> {
    read.map_err(|e| {
        leptos::logging::warn!("{} {} body read failed: {}", method.as_str(), path, e);
        ApiError::Connection(e.to_string())
    })
}

/// Send a request and return `(status, body)` without classifying it.
async fn send_raw(method: HttpMethod, path: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let url = endpoint(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("Accept", "application/json");

        let request = match body {
            Some(json) => builder.header("Content-Type", "application/json").body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Connection(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(config::REQUEST_TIMEOUT_MS));
        let resp = match select(send, timeout).await {
            Either::Left((Ok(resp), _)) => resp,
            Either::Left((Err(e), _)) => {
                leptos::logging::warn!("{} {} failed: {}", method.as_str(), path, e);
                return Err(ApiError::Connection(e.to_string()));
            }
            Either::Right(_) => {
                leptos::logging::warn!("{} {} timed out", method.as_str(), path);
                return Err(ApiError::Timeout);
            }
        };
        let status = resp.status();
        let text = read_body(method, path, resp.text().await)?;
        Ok((status, text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Connection("not available on server".to_owned()))
    }
}

fn encode_body<B: Serialize>(method: HttpMethod, body: Option<&B>) -> Result<Option<String>, ApiError> {
    match body {
        Some(body) if method.has_body() => serde_json::to_string(body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
        _ => Ok(None),
    }
}

/// Send a request and decode a JSON response.
///
/// # Errors
///
/// Returns a classified `ApiError` for transport failures, non-2xx statuses,
/// or bodies that do not decode as `T`.
pub async fn request_json_with<B, T>(
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
    options: RequestOptions,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload = encode_body(method, body)?;
    let (status, text) = send_raw(method, path, payload).await?;
    check_status(status, &text, options)?;
    decode(&text)
}

/// Send a request and decode a JSON response.
///
/// # Errors
///
/// See [`request_json_with`].
pub async fn request_json<B, T>(method: HttpMethod, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    request_json_with(method, path, body, RequestOptions::default()).await
}

/// Send a request whose response body is ignored.
///
/// # Errors
///
/// Returns a classified `ApiError` for transport failures or non-2xx statuses.
pub async fn request_empty<B: Serialize>(method: HttpMethod, path: &str, body: Option<&B>) -> Result<(), ApiError> {
    let payload = encode_body(method, body)?;
    let (status, text) = send_raw(method, path, payload).await?;
    check_status(status, &text, RequestOptions::default())
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// See [`request_json_with`].
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request_json::<(), T>(HttpMethod::Get, path, None).await
}

/// Fixed-attempt, fixed-delay retry budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay_ms: u32,
}

impl RetryPolicy {
    /// Budget for auth-sensitive reads such as the session check.
    pub const AUTH: RetryPolicy = RetryPolicy {
        attempts: config::AUTH_RETRY_ATTEMPTS,
        delay_ms: config::AUTH_RETRY_DELAY_MS,
    };
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// attempt budget is spent. `sleep` is awaited between attempts.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub async fn retry<T, Op, Fut, Sleep, SleepFut>(policy: RetryPolicy, mut op: Op, sleep: Sleep) -> Result<T, ApiError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    Sleep: Fn(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts && err.is_retryable() => {
                leptos::logging::log!("retrying after {err} (attempt {attempt}/{attempts})");
                sleep(policy.delay_ms).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Browser timer sleep; resolves immediately outside the browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
