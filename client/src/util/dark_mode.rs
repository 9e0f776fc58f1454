//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage`, so the choice survives reloads.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

/// Resolve the effective preference from a stored choice and the system
/// color-scheme. A stored choice always wins.
pub fn preference_from_stored(stored: Option<bool>, system_prefers_dark: bool) -> bool {
    stored.unwrap_or(system_prefers_dark)
}

/// Read the dark mode preference from localStorage, falling back to the
/// `prefers-color-scheme` media query.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let system = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        preference_from_stored(storage::DARK_MODE.load(), system)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        preference_from_stored(storage::DARK_MODE.load(), false)
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::DARK_MODE.save(&next);
    next
}
