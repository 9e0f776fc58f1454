//! Transient toast messages.
//!
//! DESIGN
//! ======
//! Toasts carry their creation time so a single timer in `ToastHost` can
//! prune expired entries. The queue is capped; the oldest toast is evicted
//! when a new one would exceed the cap.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::{MAX_TOASTS, TOAST_TTL_MS};
use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast stamped with `now_ms`; returns its id.
    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into(), created_ms: now_ms });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, now_ms())
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    /// Toast a failed request. 401s are skipped: the session-expiry handler
    /// already told the user.
    pub fn api_error(&mut self, err: &ApiError) -> Option<u64> {
        (!err.is_unauthorized()).then(|| self.error(err.user_message()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts older than the TTL. Returns whether anything was removed.
    pub fn prune(&mut self, now_ms: u64) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now_ms.saturating_sub(t.created_ms) < TOAST_TTL_MS);
        self.toasts.len() != before
    }
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
