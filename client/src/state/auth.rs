//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session itself is an
//! `HttpOnly` cookie; this only mirrors what the last check said.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and check status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// A session check is in flight.
    pub loading: bool,
    /// At least one check (or explicit login/logout) has completed.
    pub checked: bool,
    /// The last sign-out was caused by a 401, not by the user.
    pub expired: bool,
}

impl AuthState {
    /// State used before the first check resolves.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn begin_check(&mut self) {
        self.loading = true;
    }

    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.checked = true;
        self.expired = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.checked = true;
        self.expired = false;
    }

    pub fn session_expired(&mut self) {
        self.signed_out();
        self.expired = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Whether `owner_id` is the signed-in user.
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id() == Some(owner_id)
    }
}
