//! Game catalog endpoints.

use crate::net::client::{HttpMethod, get_json, request_empty, request_json, with_query};
use crate::net::error::ApiError;
use crate::net::types::{Availability, Game, GameInput, GameInstance, Page};

/// Filters for `GET /api/games`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameQuery {
    pub search: Option<String>,
    pub owner_id: Option<i64>,
    pub page: Option<u32>,
}

pub(crate) fn games_path(query: &GameQuery) -> String {
    with_query(
        "/api/games",
        &[
            ("search", query.search.clone()),
            ("owner_id", query.owner_id.map(|id| id.to_string())),
            ("page", query.page.map(|p| p.to_string())),
        ],
    )
}

pub(crate) fn game_path(id: i64) -> String {
    format!("/api/games/{id}")
}

pub(crate) fn availability_path(id: i64) -> String {
    format!("/api/games/{id}/availability")
}

pub(crate) fn copy_path(id: i64) -> String {
    format!("/api/games/{id}/copy")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_games(query: &GameQuery) -> Result<Page<Game>, ApiError> {
    get_json(&games_path(query)).await
}

/// # Errors
///
/// `NotFound` for unknown ids.
pub async fn get_game(id: i64) -> Result<Game, ApiError> {
    get_json(&game_path(id)).await
}

/// # Errors
///
/// Status errors carry the backend's validation message.
pub async fn create_game(input: &GameInput) -> Result<Game, ApiError> {
    request_json(HttpMethod::Post, "/api/games", Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the game.
pub async fn update_game(id: i64, input: &GameInput) -> Result<Game, ApiError> {
    request_json(HttpMethod::Put, &game_path(id), Some(input)).await
}

/// # Errors
///
/// `Forbidden` when the caller does not own the game.
pub async fn delete_game(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &game_path(id), None).await
}

/// Server-computed copy availability for a game.
///
/// # Errors
///
/// Transport/status errors.
pub async fn availability(id: i64) -> Result<Availability, ApiError> {
    get_json(&availability_path(id)).await
}

/// Add a copy of a catalog game to the caller's shelf.
///
/// # Errors
///
/// Transport/status errors.
pub async fn copy_game(id: i64) -> Result<GameInstance, ApiError> {
    request_json::<(), _>(HttpMethod::Post, &copy_path(id), None).await
}
