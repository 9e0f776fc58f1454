//! Renders queued toasts and prunes expired ones on a timer.

use leptos::prelude::*;

use crate::state::toast::{ToastState, now_ms};
use crate::util::poll::spawn_poll;

const PRUNE_INTERVAL_MS: u32 = 1_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    spawn_poll(PRUNE_INTERVAL_MS, false, move || async move {
        let now = now_ms();
        if toasts.with_untracked(|t| !t.toasts.is_empty()) {
            toasts.update(|t| {
                t.prune(now);
            });
        }
    });

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
