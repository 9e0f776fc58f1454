//! Game reviews.

use crate::net::client::{HttpMethod, get_json, request_empty, request_json};
use crate::net::error::ApiError;
use crate::net::types::{Review, ReviewInput};

pub(crate) fn game_reviews_path(game_id: i64) -> String {
    format!("/api/games/{game_id}/reviews")
}

pub(crate) fn review_path(id: i64) -> String {
    format!("/api/reviews/{id}")
}

/// # Errors
///
/// Transport/status errors.
pub async fn list_reviews(game_id: i64) -> Result<Vec<Review>, ApiError> {
    get_json(&game_reviews_path(game_id)).await
}

/// # Errors
///
/// `Api { status: 409 }` when the caller already reviewed the game.
pub async fn create_review(game_id: i64, input: &ReviewInput) -> Result<Review, ApiError> {
    request_json(HttpMethod::Post, &game_reviews_path(game_id), Some(input)).await
}

/// # Errors
///
/// `Forbidden` for someone else's review.
pub async fn delete_review(id: i64) -> Result<(), ApiError> {
    request_empty::<()>(HttpMethod::Delete, &review_path(id), None).await
}
