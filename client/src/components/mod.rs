//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, and chrome while reading/writing shared
//! state from Leptos context providers. Each action calls one service
//! function and reports the result through a toast.

pub mod availability_badge;
pub mod borrow_request_dialog;
pub mod borrow_request_list;
pub mod confirm_dialog;
pub mod event_card;
pub mod event_form_dialog;
pub mod feedback;
pub mod form_field;
pub mod game_card;
pub mod game_form_dialog;
pub mod instance_list;
pub mod nav_bar;
pub mod notifications_panel;
pub mod profile_form_dialog;
pub mod reviews;
pub mod toast_host;
