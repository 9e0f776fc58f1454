//! User search and public profiles.

use crate::net::client::{get_json, with_query};
use crate::net::error::ApiError;
use crate::net::types::PublicProfile;

pub(crate) fn search_path(q: &str) -> String {
    with_query("/users/search", &[("q", Some(q.to_owned()))])
}

pub(crate) fn profile_path(id: i64) -> String {
    format!("/users/{id}")
}

/// # Errors
///
/// Transport/status errors.
pub async fn search_users(q: &str) -> Result<Vec<PublicProfile>, ApiError> {
    if q.trim().is_empty() {
        return Ok(Vec::new());
    }
    get_json(&search_path(q)).await
}

/// # Errors
///
/// `NotFound` for unknown ids.
pub async fn get_profile(id: i64) -> Result<PublicProfile, ApiError> {
    get_json(&profile_path(id)).await
}
