//! Single event: details, attendee list, join/leave, organizer tools.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::events::set_registration;
use super::{AuthGate, NotFound, load_list, use_id_param};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::event_form_dialog::EventFormDialog;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::net::api::{events, registrations};
use crate::net::error::ApiError;
use crate::net::types::{Event, Registration};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::markdown::render_markdown_html;
use crate::util::mount_guard::MountGuard;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let id = use_id_param();
    view! {
        <AuthGate>
            {move || match id.get() {
                Some(event_id) => view! { <EventDetailView event_id=event_id /> }.into_any(),
                None => view! { <NotFound /> }.into_any(),
            }}
        </AuthGate>
    }
}

#[component]
fn EventDetailView(event_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let guard = MountGuard::new();

    let event = RwSignal::new(None::<Event>);
    let load_error = RwSignal::new(None::<String>);
    let missing = RwSignal::new(false);
    let attendees = RwSignal::new(ListState::<Registration>::default());
    let busy = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let load = {
        let guard = guard.clone();
        move || {
            load_error.set(None);
            let inner = guard.clone();
            leptos::task::spawn_local(async move {
                let result = events::get_event(event_id).await;
                inner.run(|| match result {
                    Ok(found) => event.set(Some(found)),
                    Err(ApiError::NotFound(_)) => missing.set(true),
                    Err(err) => load_error.set(Some(err.user_message())),
                });
            });
            load_list(attendees, &guard, events::list_registrations(event_id));
        }
    };
    load();
    let retry = Callback::new(move |()| load());

    let reload_attendees = {
        let guard = guard.clone();
        move || load_list(attendees, &guard, events::list_registrations(event_id))
    };

    let on_join = {
        let reload_attendees = reload_attendees.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let reload_attendees = reload_attendees.clone();
            leptos::task::spawn_local(async move {
                match registrations::register_for_event(event_id).await {
                    Ok(registration) => {
                        event.update(|e| {
                            if let Some(e) = e {
                                set_registration(e, Some(registration.id));
                            }
                        });
                        reload_attendees();
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.api_error(&err);
                        });
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_leave = move |registration_id: i64| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        event.update(|e| {
            if let Some(e) = e {
                set_registration(e, None);
            }
        });
        let removed = attendees.try_update(|l| l.remove_by(|r| r.id == registration_id)).flatten();
        leptos::task::spawn_local(async move {
            if let Err(err) = registrations::cancel_registration(registration_id).await {
                event.update(|e| {
                    if let Some(e) = e {
                        set_registration(e, Some(registration_id));
                    }
                });
                if let Some((index, item)) = removed {
                    attendees.update(|l| l.restore(index, item));
                }
                toasts.update(|t| {
                    t.api_error(&err);
                });
            }
            busy.set(false);
        });
    };

    let on_saved = Callback::new(move |updated: Event| {
        editing.set(false);
        event.set(Some(updated));
    });

    let on_delete = Callback::new(move |()| {
        deleting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match events::delete_event(event_id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Event cancelled.");
                    });
                    navigate("/events", NavigateOptions::default());
                }
                Err(err) => {
                    deleting.set(false);
                    confirm_delete.set(false);
                    toasts.update(|t| {
                        t.api_error(&err);
                    });
                }
            }
        });
    });

    let is_organizer = move || event.with(|e| e.as_ref().is_some_and(|e| auth.with(|a| a.owns(e.organizer_id))));

    view! {
        <Show when=move || !missing.get() fallback=|| view! { <NotFound /> }>
            <div class="page page--event-detail">
                <ErrorBanner message=load_error on_retry=retry />
                {
                    let on_join = on_join.clone();
                    move || match event.get() {
                        None => view! { <Spinner label="Loading event..." /> }.into_any(),
                        Some(e) => {
                            let description = e.description.as_deref().map(render_markdown_html).unwrap_or_default();
                            let organizer = e.organizer_username.clone().unwrap_or_else(|| format!("user #{}", e.organizer_id));
                            let organizer_href = format!("/profile/{}", e.organizer_id);
                            let full = e.is_full();
                            let action = if is_organizer() {
                                view! {
                                    <div class="page__actions">
                                        <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                                        <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>"Delete"</button>
                                    </div>
                                }
                                .into_any()
                            } else if let Some(reg_id) = e.my_registration_id {
                                view! {
                                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_leave(reg_id)>
                                        "Leave event"
                                    </button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || busy.get() || full
                                        on:click=on_join.clone()
                                    >
                                        {if full { "Event is full" } else { "Join event" }}
                                    </button>
                                }
                                .into_any()
                            };
                            view! {
                                <header class="page__header">
                                    <div>
                                        <h1>{e.title.clone()}</h1>
                                        <p class="event-detail__when">{format::time_range(e.start_time, e.end_time)}</p>
                                        <p class="event-detail__where">{e.location.clone()}</p>
                                        <p class="event-detail__organizer">
                                            "Organized by " <a href=organizer_href>{organizer}</a>
                                        </p>
                                        <p class="event-detail__spots">
                                            {e.participant_count} " going · " {format::spots_left(e.spots_left())}
                                        </p>
                                    </div>
                                    {action}
                                </header>
                                <div class="markdown" inner_html=description></div>
                            }
                            .into_any()
                        }
                    }
                }
                <section class="attendees">
                    <h2>"Who's coming"</h2>
                    <Show when=move || attendees.with(|l| l.loading)>
                        <Spinner />
                    </Show>
                    <Show when=move || attendees.with(|l| !l.loading && l.is_empty())>
                        <p class="empty">"No one has registered yet."</p>
                    </Show>
                    <ul class="attendees__list">
                        <For each=move || attendees.get().items key=|r| r.id let:registration>
                            <li>
                                <a href=format!("/profile/{}", registration.user_id)>
                                    {registration.username.clone().unwrap_or_else(|| format!("user #{}", registration.user_id))}
                                </a>
                            </li>
                        </For>
                    </ul>
                </section>
                <Show when=move || editing.get()>
                    <EventFormDialog
                        existing=event.get_untracked()
                        on_cancel=Callback::new(move |()| editing.set(false))
                        on_saved=on_saved
                    />
                </Show>
                <Show when=move || confirm_delete.get()>
                    <ConfirmDialog
                        title="Delete event"
                        message="Delete this event? Registered attendees will be notified."
                        confirm_label="Delete"
                        busy=Signal::derive(move || deleting.get())
                        on_confirm=on_delete
                        on_cancel=Callback::new(move |()| confirm_delete.set(false))
                    />
                </Show>
            </div>
        </Show>
    }
}
