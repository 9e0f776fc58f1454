//! Networking: the shared HTTP client, error taxonomy, wire types, and
//! per-resource REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components call `api::*`; those call `client`, which owns
//! credentials, timeouts, status classification, and the 401 hook.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
