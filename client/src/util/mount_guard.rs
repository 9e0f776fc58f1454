//! Drop async results that arrive after their component unmounted.

#[cfg(test)]
#[path = "mount_guard_test.rs"]
mod mount_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountGuard {
    /// A guard tied to the current reactive owner; it flips to dead when
    /// the owner is cleaned up.
    pub fn new() -> Self {
        let guard = Self::default();
        let alive = guard.alive.clone();
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
        guard
    }

    pub fn alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `apply` only if still mounted.
    pub fn run<F: FnOnce()>(&self, apply: F) {
        if self.alive() {
            apply();
        }
    }
}
