//! Community events.

use crate::net::client::{HttpMethod, get_json, request_empty, request_json, with_query};
use crate::net::error::ApiError;
use crate::net::types::{Event, EventInput, Registration};

/// Filters for `GET /api/events`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub upcoming_only: bool,
    /// Only events the caller organizes.
    pub mine: bool,
}

fn flag(on: bool) -> Option<String> {
    on.then(|| "true".to_owned())
}

pub(crate) fn events_path(query: EventQuery) -> String {
    with_query(
        "/api/events",
        &[("upcoming", flag(query.upcoming_only)), ("mine", flag(query.mine))],
    )
}

pub(crate) fn event_path(id: i64) -> String {
    format!("/api/events/{id}")
}

pub(crate) fn event_registrations_path(id: i64) -> String {
    format!("/api/events/{id}/registrations")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_events(query: EventQuery) -> Result<Vec<Event>, ApiError> {
    get_json(&events_path(query)).await
}

/// # Errors
///
/// `NotFound` for unknown ids.
pub async fn get_event(id: i64) -> Result<Event, ApiError> {
    get_json(&event_path(id)).await
}

/// # Errors
///
/// Status errors carry the backend's validation message.
pub async fn create_event(input: &EventInput) -> Result<Event, ApiError> {
    request_json(HttpMethod::Post, "/api/events", Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller is not the organizer.
pub async fn update_event(id: i64, input: &EventInput) -> Result<Event, ApiError> {
    request_json(HttpMethod::Put, &event_path(id), Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller is not the organizer.
pub async fn delete_event(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &event_path(id), None).await
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_registrations(event_id: i64) -> Result<Vec<Registration>, ApiError> {
    get_json(&event_registrations_path(event_id)).await
}
