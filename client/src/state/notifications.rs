//! Notification list state for the bell panel.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loaded: bool,
    pub last_error: Option<String>,
}

impl NotificationsState {
    /// Replace the list with a fresh poll result.
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loaded = true;
        self.last_error = None;
    }

    /// Record a failed poll; the previous list stays visible.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Optimistically mark `id` read. Returns `true` if it was unread, which
    /// is when the caller should send the request (and possibly revert).
    pub fn mark_read_local(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Undo `mark_read_local` after the server rejected it.
    pub fn revert_read(&mut self, id: i64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.is_read = false;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
