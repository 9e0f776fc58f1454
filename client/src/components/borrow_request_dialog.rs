//! Ask an owner to lend a specific copy.

use leptos::prelude::*;

use crate::components::form_field::{TextArea, TextField};
use crate::forms::FormErrors;
use crate::forms::borrow::{BorrowDraft, validate};
use crate::net::api::borrowing;
use crate::net::types::{BorrowRequest, GameInstance};
use crate::state::toast::ToastState;
use crate::util::format;

#[component]
pub fn BorrowRequestDialog(
    instance: GameInstance,
    #[prop(into)] game_title: String,
    on_cancel: Callback<()>,
    on_sent: Callback<BorrowRequest>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let instance_id = instance.id;
    let owner = instance.owner_username.unwrap_or_else(|| "the owner".to_owned());

    let start_date = RwSignal::new(format::today().format("%Y-%m-%d").to_string());
    let end_date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = BorrowDraft {
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            message: message.get_untracked(),
        };
        let input = match validate(&draft, instance_id, format::today()) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = borrowing::create_request(&input).await;
            busy.set(false);
            match result {
                Ok(request) => {
                    toasts.update(|t| {
                        t.success("Request sent.");
                    });
                    on_sent.run(request);
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
                <h2>"Borrow " {game_title}</h2>
                <p class="dialog__hint">"Your request goes to " {owner} " for approval."</p>
                <div class="field-row">
                    <TextField label="From" value=start_date errors=errors field="start_date" input_type="date" />
                    <TextField label="Until" value=end_date errors=errors field="end_date" input_type="date" />
                </div>
                <TextArea label="Message (optional)" value=message errors=errors field="message" rows=3 />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Send request"
                    </button>
                </div>
            </form>
        </div>
    }
}
