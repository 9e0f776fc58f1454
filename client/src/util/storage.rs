//! Typed localStorage slots for the few values the app remembers.
//!
//! Every persisted value is declared here as a [`Remembered`] constant, so
//! keys and value types live in one place and a page cannot read a slot
//! with the wrong type. Values are stored as JSON; a slot that fails to
//! decode (hand-edited, or written by an older build) reads as empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Dark-mode choice; absent until the user toggles once.
pub const DARK_MODE: Remembered<bool> = Remembered::new("boardshare_dark_mode");
/// Last text typed into the games search box.
pub const GAMES_SEARCH: Remembered<String> = Remembered::new("boardshare_games_search");

/// A named localStorage slot holding a `T`.
pub struct Remembered<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for Remembered<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Remembered<T> {}

impl<T: Serialize + DeserializeOwned> Remembered<T> {
    pub const fn new(key: &'static str) -> Self {
        Self { key, _value: PhantomData }
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    pub fn decode(self, raw: &str) -> Option<T> {
        serde_json::from_str(raw).ok()
    }

    pub fn encode(self, value: &T) -> Option<String> {
        serde_json::to_string(value).ok()
    }

    /// Stored value, or `None` when unset, undecodable, or outside the browser.
    pub fn load(self) -> Option<T> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(self.key).ok().flatten()?;
            self.decode(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    pub fn save(self, value: &T) {
        #[cfg(feature = "hydrate")]
        {
            if let (Some(storage), Some(raw)) = (local_storage(), self.encode(value)) {
                let _ = storage.set_item(self.key, &raw);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    pub fn clear(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
