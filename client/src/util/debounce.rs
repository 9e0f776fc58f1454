//! Generation-counter debouncing.
//!
//! Each keystroke takes a ticket; after the quiet period the timer task asks
//! whether its ticket is still the newest. Older tickets drop out, both for
//! the timer firing and for the response that comes back later.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque ticket returned by [`Debouncer::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tickets and issue a new one.
    pub fn next(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::Relaxed).wrapping_add(1))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate outstanding tickets without issuing one (e.g. on unmount).
    pub fn cancel(&self) {
        self.next();
    }
}

/// Run `work` after `delay_ms` of quiet, unless a newer call supersedes it.
/// `work` receives the ticket so it can re-check after its own await.
#[cfg(feature = "hydrate")]
pub fn debounce<F, Fut>(debouncer: &Debouncer, delay_ms: u32, work: F)
where
    F: FnOnce(Ticket) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let ticket = debouncer.next();
    let debouncer = debouncer.clone();
    leptos::task::spawn_local(async move {
        crate::net::client::sleep_ms(delay_ms).await;
        if debouncer.is_current(ticket) {
            work(ticket).await;
        }
    });
}

/// SSR has no timers; run immediately.
#[cfg(not(feature = "hydrate"))]
pub fn debounce<F, Fut>(debouncer: &Debouncer, delay_ms: u32, work: F)
where
    F: FnOnce(Ticket) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let _ = delay_ms;
    let ticket = debouncer.next();
    futures::executor::block_on(work(ticket));
}
