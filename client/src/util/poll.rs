//! Fixed-interval background polling tied to a component's lifetime.
//!
//! The loop checks an `Arc<AtomicBool>` after every sleep, and the flag is
//! cleared from `on_cleanup`, so an unmounted view stops polling at the
//! next tick instead of leaking a timer task.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Call `tick` every `interval_ms` (and once up front when `immediate`)
/// until the current reactive owner is cleaned up.
pub fn spawn_poll<F, Fut>(interval_ms: u32, immediate: bool, tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    let on_drop = handle.clone();
    leptos::prelude::on_cleanup(move || on_drop.stop());

    #[cfg(feature = "hydrate")]
    {
        let mut tick = tick;
        let task = handle.clone();
        leptos::task::spawn_local(async move {
            if immediate {
                tick().await;
            }
            loop {
                crate::net::client::sleep_ms(interval_ms).await;
                if !task.is_running() {
                    break;
                }
                tick().await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval_ms, immediate, tick);
    }

    handle
}
