//! Client runtime constants.
//!
//! Timings for retries, polling, debouncing, and toasts live here so pages and
//! the HTTP client agree on them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Per-request timeout for REST calls.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Attempts for auth-sensitive reads (session check).
pub const AUTH_RETRY_ATTEMPTS: u32 = 3;

/// Fixed delay between auth retry attempts.
pub const AUTH_RETRY_DELAY_MS: u32 = 1_000;

/// How often a signed-in session is re-validated.
pub const SESSION_RECHECK_INTERVAL_MS: u32 = 300_000;

/// Notification refetch interval while signed in.
pub const NOTIFICATION_POLL_INTERVAL_MS: u32 = 30_000;

/// Quiet period before a search box triggers a fetch.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Lifetime of a toast before it is pruned.
pub const TOAST_TTL_MS: u64 = 4_000;

/// Maximum toasts shown at once.
pub const MAX_TOASTS: usize = 5;

/// Readable cookie the backend sets alongside the `HttpOnly` session cookie.
pub const AUTH_FLAG_COOKIE: &str = "isAuthenticated";

/// Base URL prepended to every REST path.
///
/// Empty by default so requests stay same-origin and go through the host proxy.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("API_BASE_URL").unwrap_or(""))
}

fn normalize_base_url(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
