//! In-app notifications.

use crate::net::client::{HttpMethod, get_json, request_empty};
use crate::net::error::ApiError;
use crate::net::types::Notification;

pub(crate) const NOTIFICATIONS_PATH: &str = "/api/notifications";

pub(crate) fn read_path(id: i64) -> String {
    format!("{NOTIFICATIONS_PATH}/{id}/read")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_notifications() -> Result<Vec<Notification>, ApiError> {
    get_json(NOTIFICATIONS_PATH).await
}

/// # Errors
///
/// Transport/status errors.
pub async fn mark_read(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Put, &read_path(id), None).await
}
