//! Event listing with create, join and leave.

use leptos::prelude::*;

use super::{AuthGate, load_list};
use crate::components::event_card::EventCard;
use crate::components::event_form_dialog::EventFormDialog;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::net::api::events::{self, EventQuery};
use crate::net::api::registrations;
use crate::net::types::Event;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::mount_guard::MountGuard;

/// Set the caller's registration on `event`, keeping the head count in step.
pub(crate) fn set_registration(event: &mut Event, registration_id: Option<i64>) {
    match (event.my_registration_id, registration_id) {
        (None, Some(_)) => event.participant_count += 1,
        (Some(_), None) => event.participant_count = event.participant_count.saturating_sub(1),
        _ => {}
    }
    event.my_registration_id = registration_id;
}

fn update_event(list: RwSignal<ListState<Event>>, event_id: i64, registration_id: Option<i64>) {
    list.update(|l| {
        if let Some(event) = l.items.iter_mut().find(|e| e.id == event_id) {
            set_registration(event, registration_id);
        }
    });
}

/// Register for `event_id`; the list is updated once the backend assigns
/// the registration id.
pub(crate) fn join(list: RwSignal<ListState<Event>>, busy: RwSignal<Option<i64>>, toasts: RwSignal<ToastState>, event_id: i64) {
    if busy.get_untracked().is_some() {
        return;
    }
    busy.set(Some(event_id));
    leptos::task::spawn_local(async move {
        match registrations::register_for_event(event_id).await {
            Ok(registration) => {
                update_event(list, event_id, Some(registration.id));
                toasts.update(|t| {
                    t.success("You're registered.");
                });
            }
            Err(err) => {
                toasts.update(|t| {
                    t.api_error(&err);
                });
            }
        }
        busy.set(None);
    });
}

/// Leave optimistically; the registration comes back if the cancel fails.
pub(crate) fn leave(
    list: RwSignal<ListState<Event>>,
    busy: RwSignal<Option<i64>>,
    toasts: RwSignal<ToastState>,
    (event_id, registration_id): (i64, i64),
) {
    if busy.get_untracked().is_some() {
        return;
    }
    busy.set(Some(event_id));
    update_event(list, event_id, None);
    leptos::task::spawn_local(async move {
        if let Err(err) = registrations::cancel_registration(registration_id).await {
            update_event(list, event_id, Some(registration_id));
            toasts.update(|t| {
                t.api_error(&err);
            });
        }
        busy.set(None);
    });
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <AuthGate>
            <EventsView />
        </AuthGate>
    }
}

#[component]
fn EventsView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let guard = MountGuard::new();

    let query = RwSignal::new(EventQuery { upcoming_only: true, mine: false });
    let list = RwSignal::new(ListState::<Event>::default());
    let busy = RwSignal::new(None::<i64>);
    let creating = RwSignal::new(false);

    Effect::new({
        let guard = guard.clone();
        move || {
            let q = query.get();
            load_list(list, &guard, events::list_events(q));
        }
    });

    let retry = Callback::new({
        let guard = guard.clone();
        move |()| load_list(list, &guard, events::list_events(query.get_untracked()))
    });
    let on_join = Callback::new(move |id: i64| join(list, busy, toasts, id));
    let on_leave = Callback::new(move |ids: (i64, i64)| leave(list, busy, toasts, ids));
    let on_saved = Callback::new(move |event: Event| {
        creating.set(false);
        list.update(|l| l.upsert_by(event, |e| e.id));
    });

    let error = Signal::derive(move || list.with(|l| l.error.clone()));

    view! {
        <div class="page page--events">
            <header class="page__header">
                <h1>"Events"</h1>
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                    "Create event"
                </button>
            </header>
            <div class="filters">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.upcoming_only)
                        on:change=move |ev| query.update(|q| q.upcoming_only = event_target_checked(&ev))
                    />
                    "Upcoming only"
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.mine)
                        on:change=move |ev| query.update(|q| q.mine = event_target_checked(&ev))
                    />
                    "Organized by me"
                </label>
            </div>
            <ErrorBanner message=error on_retry=retry />
            <Show when=move || list.with(|l| l.loading)>
                <Spinner label="Loading events..." />
            </Show>
            <Show when=move || list.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                <p class="empty-state">"No events to show."</p>
            </Show>
            <div class="event-grid">
                <For
                    each=move || list.get().items
                    key=|e| (e.id, e.participant_count, e.my_registration_id)
                    children=move |event| {
                        let id = event.id;
                        let organizer = auth.with_untracked(|a| a.owns(event.organizer_id));
                        view! {
                            <EventCard
                                event=event
                                organizer=organizer
                                busy=Signal::derive(move || busy.get() == Some(id))
                                on_join=on_join
                                on_leave=on_leave
                            />
                        }
                    }
                />
            </div>
            <Show when=move || creating.get()>
                <EventFormDialog existing=None on_cancel=Callback::new(move |()| creating.set(false)) on_saved=on_saved />
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
