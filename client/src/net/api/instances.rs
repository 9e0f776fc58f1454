//! Physical copies (instances) of a cataloged game.

use crate::net::client::{HttpMethod, get_json, request_empty, request_json};
use crate::net::error::ApiError;
use crate::net::types::{GameInstance, InstanceInput};

pub(crate) fn instances_path(game_id: i64) -> String {
    format!("/api/games/{game_id}/instances")
}

pub(crate) fn instance_path(game_id: i64, id: i64) -> String {
    format!("/api/games/{game_id}/instances/{id}")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_instances(game_id: i64) -> Result<Vec<GameInstance>, ApiError> {
    get_json(&instances_path(game_id)).await
}

/// # Errors
///
/// Status errors carry the backend's validation message.
pub async fn create_instance(game_id: i64, input: &InstanceInput) -> Result<GameInstance, ApiError> {
    request_json(HttpMethod::Post, &instances_path(game_id), Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the instance.
pub async fn update_instance(game_id: i64, id: i64, input: &InstanceInput) -> Result<GameInstance, ApiError> {
    request_json(HttpMethod::Put, &instance_path(game_id, id), Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the instance.
pub async fn delete_instance(game_id: i64, id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &instance_path(game_id, id), None).await
}
