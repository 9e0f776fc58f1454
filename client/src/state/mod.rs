//! Shared client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `toast`, ...) into plain structs
//! with pure transitions. `app` wraps each in an `RwSignal` and provides it
//! via context, so components mutate through `update(|s| s.transition())`.

pub mod auth;
pub mod listing;
pub mod notifications;
pub mod toast;
pub mod ui;
