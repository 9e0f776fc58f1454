//! REST service modules, one per backend resource.
//!
//! Each function calls exactly one endpoint through [`super::client`] and
//! returns a classified [`ApiError`](super::error::ApiError) on failure. Path
//! construction lives in small pure helpers so it can be tested natively.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub mod auth;
pub mod borrowing;
pub mod events;
pub mod games;
pub mod instances;
pub mod notifications;
pub mod registrations;
pub mod reviews;
pub mod users;
