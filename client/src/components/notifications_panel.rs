//! Notification bell panel with fixed-interval polling.
//!
//! Polling runs while the nav bar is mounted and a user is signed in; it is
//! stopped on unmount. Marking an item read updates the list immediately and
//! rolls back if the server rejects it.

use leptos::prelude::*;

use crate::config::NOTIFICATION_POLL_INTERVAL_MS;
use crate::net::api::notifications as api;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::format;
use crate::util::poll::spawn_poll;

async fn refresh(auth: RwSignal<AuthState>, notifications: RwSignal<NotificationsState>) {
    if !auth.with_untracked(AuthState::is_authenticated) {
        return;
    }
    match api::list_notifications().await {
        Ok(items) => notifications.update(|n| n.replace(items)),
        Err(err) => {
            leptos::logging::warn!("notification poll failed: {err}");
            notifications.update(|n| n.failed(err.user_message()));
        }
    }
}

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    spawn_poll(NOTIFICATION_POLL_INTERVAL_MS, true, move || refresh(auth, notifications));

    let mark_read = move |id: i64| {
        let mut changed = false;
        notifications.update(|n| changed = n.mark_read_local(id));
        if !changed {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Err(err) = api::mark_read(id).await {
                notifications.update(|n| n.revert_read(id));
                toasts.update(|t| {
                    t.api_error(&err);
                });
            }
        });
    };

    view! {
        <Show when=move || ui.get().notifications_open>
            <div class="notifications-panel">
                <h3 class="notifications-panel__title">"Notifications"</h3>
                <Show when=move || notifications.with(|n| n.last_error.is_some())>
                    <p class="notifications-panel__error">
                        {move || notifications.with(|n| n.last_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show
                    when=move || notifications.with(|n| !n.items.is_empty())
                    fallback=move || view! {
                        <p class="notifications-panel__empty">
                            {move || if notifications.with(|n| n.loaded) { "You're all caught up." } else { "Loading..." }}
                        </p>
                    }
                >
                    <ul class="notifications-panel__list">
                        <For
                            each=move || notifications.get().items
                            key=|n| (n.id, n.is_read)
                            children=move |n| {
                                let id = n.id;
                                let when = n.created_at.map(format::date_time).unwrap_or_default();
                                let link = n.link.clone();
                                view! {
                                    <li
                                        class="notifications-panel__item"
                                        class:notifications-panel__item--unread=!n.is_read
                                        on:click=move |_| mark_read(id)
                                    >
                                        {match link {
                                            Some(href) => view! { <a href=href>{n.message.clone()}</a> }.into_any(),
                                            None => view! { <span>{n.message.clone()}</span> }.into_any(),
                                        }}
                                        <time class="notifications-panel__time">{when}</time>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
