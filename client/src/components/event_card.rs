//! Summary card for an event with join/leave.

use leptos::prelude::*;

use crate::net::types::Event;
use crate::util::format;

#[component]
pub fn EventCard(
    event: Event,
    /// Whether the caller organizes this event (hides join/leave).
    #[prop(optional)]
    organizer: bool,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    on_join: Callback<i64>,
    on_leave: Callback<(i64, i64)>,
) -> impl IntoView {
    let id = event.id;
    let href = format!("/events/{id}");
    let when = format::time_range(event.start_time, event.end_time);
    let spots = format::spots_left(event.spots_left());
    let registration = event.my_registration_id;
    let full = event.is_full();

    let action = if organizer {
        view! { <span class="badge">"Organizer"</span> }.into_any()
    } else if let Some(reg_id) = registration {
        view! {
            <button class="btn btn--small" disabled=move || busy.get() on:click=move |_| on_leave.run((id, reg_id))>
                "Leave"
            </button>
        }
        .into_any()
    } else {
        view! {
            <button
                class="btn btn--small btn--primary"
                disabled=move || busy.get() || full
                on:click=move |_| on_join.run(id)
            >
                {if full { "Full" } else { "Join" }}
            </button>
        }
        .into_any()
    };

    view! {
        <article class="event-card">
            <a class="event-card__title" href=href>{event.title}</a>
            <p class="event-card__when">{when}</p>
            <p class="event-card__where">{event.location}</p>
            <p class="event-card__spots">{event.participant_count} " going · " {spots}</p>
            <div class="event-card__actions">{action}</div>
        </article>
    }
}
