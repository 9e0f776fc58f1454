//! Session lifecycle: initial check, periodic re-check, and expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` bootstraps once on hydrate. The flag cookie short-circuits the check
//! for visitors who were never signed in; otherwise `GET /users/me` runs under
//! the auth retry policy. Any later 401 from an authenticated call lands in
//! the handler installed here, which signs out and routes to `/login`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::SESSION_RECHECK_INTERVAL_MS;
use crate::net::api;
use crate::net::client::{RetryPolicy, retry, set_unauthorized_handler, sleep_ms};
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::{cookies, poll};

pub const EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// What a finished session check means for the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    SignedIn(User),
    /// No valid session; not worth a toast.
    SignedOut,
    /// The backend could not be reached after retries.
    Failed(String),
}

pub fn classify_check(result: Result<User, ApiError>) -> CheckOutcome {
    match result {
        Ok(user) => CheckOutcome::SignedIn(user),
        Err(err) if err.is_unauthorized() || matches!(err, ApiError::Forbidden(_)) => CheckOutcome::SignedOut,
        Err(err) => CheckOutcome::Failed(err.user_message()),
    }
}

/// `GET /users/me` with fixed-delay retries for transient failures.
///
/// # Errors
///
/// The last error after the retry budget is spent, or immediately for 401.
pub async fn check_session() -> Result<User, ApiError> {
    retry(RetryPolicy::AUTH, api::auth::current_user, sleep_ms).await
}

fn apply_check(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, outcome: CheckOutcome) {
    match outcome {
        CheckOutcome::SignedIn(user) => auth.update(|a| a.signed_in(user)),
        CheckOutcome::SignedOut => {
            cookies::clear_auth_flag();
            auth.update(AuthState::signed_out);
        }
        CheckOutcome::Failed(message) => {
            leptos::logging::warn!("session check failed: {message}");
            auth.update(AuthState::signed_out);
            toasts.update(|t| {
                t.error(message);
            });
        }
    }
}

/// Resolve the initial auth state.
pub fn bootstrap_session(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    if !cookies::auth_flag_present() {
        auth.update(AuthState::signed_out);
        return;
    }
    auth.update(AuthState::begin_check);
    leptos::task::spawn_local(async move {
        let outcome = classify_check(check_session().await);
        apply_check(auth, toasts, outcome);
    });
}

/// Handle a 401 from an authenticated request: clear local session state,
/// tell the user once, and route to `/login`.
pub fn expire_session<F>(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    cookies::clear_auth_flag();
    // Parallel requests can all 401; only the first one toasts.
    let first = auth.with_untracked(|a| a.user.is_some() || !a.expired);
    auth.update(AuthState::session_expired);
    if first {
        toasts.update(|t| {
            t.error(EXPIRED_MESSAGE);
        });
    }
    navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
}

/// Register the HTTP client's unauthorized hook.
pub fn install_session_expiry_handler<F>(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    set_unauthorized_handler(Rc::new(move || expire_session(auth, toasts, &navigate)));
    on_cleanup(crate::net::client::clear_unauthorized_handler);
}

/// Re-validate the session on an interval while signed in. A 401 fires the
/// expiry hook through the HTTP client.
pub fn spawn_session_recheck(auth: RwSignal<AuthState>) -> poll::PollHandle {
    poll::spawn_poll(SESSION_RECHECK_INTERVAL_MS, false, move || async move {
        if !auth.with_untracked(AuthState::is_authenticated) {
            return;
        }
        match api::auth::refresh_current_user().await {
            Ok(user) => auth.update(|a| a.signed_in(user)),
            Err(err) if err.is_unauthorized() => {}
            Err(err) => leptos::logging::warn!("session recheck failed: {err}"),
        }
    })
}

/// Sign out at the backend and locally. Local state is cleared even when
/// the request fails so the user is never stuck signed in.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::auth::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    cookies::clear_auth_flag();
    auth.update(AuthState::signed_out);
}
