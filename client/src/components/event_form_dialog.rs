//! Create/edit event modal.
//!
//! The form is validated locally before any request: missing fields, a
//! start in the past, or an end at/before the start never reach the API.

use leptos::prelude::*;

use crate::components::form_field::{TextArea, TextField};
use crate::forms::FormErrors;
use crate::forms::event::{EventDraft, validate};
use crate::net::api::events;
use crate::net::types::Event;
use crate::state::toast::ToastState;
use crate::util::format;

#[component]
pub fn EventFormDialog(existing: Option<Event>, on_cancel: Callback<()>, on_saved: Callback<Event>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing_id = existing.as_ref().map(|e| e.id);
    let initial = existing.as_ref().map(EventDraft::from_event).unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let location = RwSignal::new(initial.location);
    let start_time = RwSignal::new(initial.start_time);
    let end_time = RwSignal::new(initial.end_time);
    let max_participants = RwSignal::new(initial.max_participants);
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = EventDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            start_time: start_time.get_untracked(),
            end_time: end_time.get_untracked(),
            max_participants: max_participants.get_untracked(),
        };
        let input = match validate(&draft, format::now_local(), editing_id.is_some()) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => events::update_event(id, &input).await,
                None => events::create_event(&input).await,
            };
            busy.set(false);
            match result {
                Ok(event) => {
                    toasts.update(|t| {
                        t.success(if editing_id.is_some() { "Event updated." } else { "Event created." });
                    });
                    on_saved.run(event);
                }
                Err(err) => toasts.update(|t| {
                    t.api_error(&err);
                }),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{if editing_id.is_some() { "Edit event" } else { "New event" }}</h2>
                <TextField label="Title" value=title errors=errors field="title" />
                <TextField label="Location" value=location errors=errors field="location" />
                <div class="field-row">
                    <TextField label="Starts" value=start_time errors=errors field="start_time" input_type="datetime-local" />
                    <TextField label="Ends" value=end_time errors=errors field="end_time" input_type="datetime-local" />
                </div>
                <TextField
                    label="Max participants"
                    value=max_participants
                    errors=errors
                    field="max_participants"
                    input_type="number"
                    placeholder="No limit"
                />
                <TextArea label="Description (markdown)" value=description errors=errors field="description" rows=5 />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
