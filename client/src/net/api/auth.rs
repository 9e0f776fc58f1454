//! Session endpoints: login, register, logout, and the current-user check.

use crate::net::client::{HttpMethod, RequestOptions, get_json, request_empty, request_json, request_json_with};
use crate::net::error::ApiError;
use crate::net::types::{LoginInput, ProfileInput, RegisterInput, User};

pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const REGISTER_PATH: &str = "/auth/register";
pub(crate) const LOGOUT_PATH: &str = "/auth/logout";
pub(crate) const ME_PATH: &str = "/users/me";

/// Sign in. The backend sets the session and `isAuthenticated` cookies.
///
/// # Errors
///
/// `Unauthorized` for bad credentials, or any transport/status error.
pub async fn login(input: &LoginInput) -> Result<User, ApiError> {
    // A failed login is not a session expiry.
    request_json_with(HttpMethod::Post, LOGIN_PATH, Some(input), RequestOptions::SILENT).await
}

/// Create an account; the backend signs the new user in.
///
/// # Errors
///
/// Status errors carry the backend's validation message.
pub async fn register(input: &RegisterInput) -> Result<User, ApiError> {
    request_json_with(HttpMethod::Post, REGISTER_PATH, Some(input), RequestOptions::SILENT).await
}

/// End the session server-side.
///
/// # Errors
///
/// Transport/status errors; callers clear local state regardless.
pub async fn logout() -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Post, LOGOUT_PATH, None).await
}

/// Check the session. A 401 here means "signed out", not "expired", so it
/// does not fire the unauthorized hook.
///
/// # Errors
///
/// `Unauthorized` when there is no valid session.
pub async fn current_user() -> Result<User, ApiError> {
    request_json_with::<(), User>(HttpMethod::Get, ME_PATH, None, RequestOptions::SILENT).await
}

/// Re-validate an established session; a 401 here does fire the hook.
///
/// # Errors
///
/// `Unauthorized` when the session has expired.
pub async fn refresh_current_user() -> Result<User, ApiError> {
    get_json(ME_PATH).await
}

/// Update the signed-in user's profile.
///
/// # Errors
///
/// Status errors carry the backend's validation message.
pub async fn update_profile(input: &ProfileInput) -> Result<User, ApiError> {
    request_json(HttpMethod::Put, ME_PATH, Some(input)).await
}
