//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! timers) from page and component logic.

pub mod auth;
pub mod cookies;
pub mod dark_mode;
pub mod debounce;
pub mod format;
pub mod markdown;
pub mod mount_guard;
pub mod poll;
pub mod session;
pub mod storage;
