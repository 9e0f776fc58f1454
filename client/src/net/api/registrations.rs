//! Event registrations (a user's enrollment in an event).

use serde::Serialize;

use crate::net::client::{HttpMethod, get_json, request_empty, request_json};
use crate::net::error::ApiError;
use crate::net::types::Registration;

pub(crate) const REGISTRATIONS_PATH: &str = "/api/registrations";
pub(crate) const MY_REGISTRATIONS_PATH: &str = "/api/registrations?mine=true";

pub(crate) fn registration_path(id: i64) -> String {
    format!("{REGISTRATIONS_PATH}/{id}")
}

#[derive(Serialize)]
struct RegistrationBody {
    event_id: i64,
}

/// Join an event.
///
/// # Errors
///
/// `Api { status: 409 | 400 }` when the event is full or already joined.
pub async fn register_for_event(event_id: i64) -> Result<Registration, ApiError> {
    request_json(HttpMethod::Post, REGISTRATIONS_PATH, Some(&RegistrationBody { event_id })).await
}

/// Leave an event.
///
/// # Errors
///
/// Transport/status errors.
pub async fn cancel_registration(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &registration_path(id), None).await
}

/// # Errors
///
/// Transport/status errors.
pub async fn my_registrations() -> Result<Vec<Registration>, ApiError> {
    get_json(MY_REGISTRATIONS_PATH).await
}
