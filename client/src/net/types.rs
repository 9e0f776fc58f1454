//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! These mirror backend JSON payloads. The client only holds view-scoped
//! copies, so every type derives `Clone` and status enums tolerate values the
//! backend may add later via an `Other` catch-all.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The signed-in user's own profile (`GET /users/me`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl User {
    /// Name shown in navigation and cards.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Another user's public profile (`GET /users/{id}`, user search).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub games_owned: u32,
    #[serde(default)]
    pub events_hosted: u32,
}

impl PublicProfile {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Payload for `PUT /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A catalog entry for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub min_players: u32,
    pub max_players: u32,
    #[serde(default)]
    pub playtime_minutes: Option<u32>,
    #[serde(default)]
    pub year_published: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub average_rating: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
}

/// Payload for creating or updating a game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameInput {
    pub title: String,
    pub description: Option<String>,
    pub min_players: u32,
    pub max_players: u32,
    pub playtime_minutes: Option<u32>,
    pub year_published: Option<i32>,
    pub image_url: Option<String>,
}

/// Server-computed availability (`GET /api/games/{id}/availability`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub total_copies: u32,
    pub available_copies: u32,
    #[serde(default)]
    pub next_available_date: Option<NaiveDate>,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// Physical condition of a game instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceCondition {
    New,
    LikeNew,
    #[default]
    Good,
    Fair,
    Poor,
    #[serde(other)]
    Other,
}

impl InstanceCondition {
    /// Conditions offered in forms, in display order.
    pub const SELECTABLE: [InstanceCondition; 5] = [
        InstanceCondition::New,
        InstanceCondition::LikeNew,
        InstanceCondition::Good,
        InstanceCondition::Fair,
        InstanceCondition::Poor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstanceCondition::New => "new",
            InstanceCondition::LikeNew => "like_new",
            InstanceCondition::Good => "good",
            InstanceCondition::Fair => "fair",
            InstanceCondition::Poor => "poor",
            InstanceCondition::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InstanceCondition::New => "New",
            InstanceCondition::LikeNew => "Like new",
            InstanceCondition::Good => "Good",
            InstanceCondition::Fair => "Fair",
            InstanceCondition::Poor => "Poor",
            InstanceCondition::Other => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|c| c.as_str() == raw)
    }
}

/// A specific physical copy of a cataloged game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInstance {
    pub id: i64,
    pub game_id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub owner_username: Option<String>,
    #[serde(default)]
    pub condition: InstanceCondition,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Payload for creating or updating an instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceInput {
    pub condition: InstanceCondition,
    pub notes: Option<String>,
    pub is_available: bool,
}

/// A community event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub max_participants: Option<u32>,
    pub organizer_id: i64,
    #[serde(default)]
    pub organizer_username: Option<String>,
    #[serde(default)]
    pub participant_count: u32,
    /// Registration id of the current user, when registered.
    #[serde(default)]
    pub my_registration_id: Option<i64>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.participant_count >= max)
    }

    pub fn spots_left(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participant_count))
    }
}

/// Payload for creating or updating an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventInput {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub max_participants: Option<u32>,
}

/// A user's enrollment in an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
}

/// Lifecycle of a borrow request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorrowStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Returned,
    #[serde(other)]
    Other,
}

impl BorrowStatus {
    pub fn label(self) -> &'static str {
        match self {
            BorrowStatus::Pending => "Pending",
            BorrowStatus::Approved => "Approved",
            BorrowStatus::Rejected => "Rejected",
            BorrowStatus::Cancelled => "Cancelled",
            BorrowStatus::Returned => "Returned",
            BorrowStatus::Other => "Unknown",
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, BorrowStatus::Pending)
    }
}

/// A pending or decided ask to borrow an instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub id: i64,
    pub instance_id: i64,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub game_title: Option<String>,
    pub borrower_id: i64,
    #[serde(default)]
    pub borrower_username: Option<String>,
    pub owner_id: i64,
    #[serde(default)]
    pub owner_username: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub message: Option<String>,
    pub status: BorrowStatus,
}

/// Payload for `POST /api/borrow-requests`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorrowRequestInput {
    pub instance_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub message: Option<String>,
}

/// A loan that was approved and handed over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LendingRecord {
    pub id: i64,
    pub instance_id: i64,
    #[serde(default)]
    pub game_title: Option<String>,
    pub lender_id: i64,
    #[serde(default)]
    pub lender_username: Option<String>,
    pub borrower_id: i64,
    #[serde(default)]
    pub borrower_username: Option<String>,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub returned_at: Option<NaiveDateTime>,
}

impl LendingRecord {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_returned() && today > self.due_date
    }
}

/// A game review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for posting a review.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewInput {
    pub rating: u8,
    pub comment: Option<String>,
}

/// An in-app notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Paged list envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}
