//! Edit-own-profile modal.

use leptos::prelude::*;

use crate::components::form_field::{TextArea, TextField};
use crate::forms::FormErrors;
use crate::forms::profile::{ProfileDraft, validate};
use crate::net::api::auth;
use crate::net::types::User;
use crate::state::toast::ToastState;

#[component]
pub fn ProfileFormDialog(user: User, on_cancel: Callback<()>, on_saved: Callback<User>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let initial = ProfileDraft::from_user(&user);

    let display_name = RwSignal::new(initial.display_name);
    let bio = RwSignal::new(initial.bio);
    let location = RwSignal::new(initial.location);
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ProfileDraft {
            display_name: display_name.get_untracked(),
            bio: bio.get_untracked(),
            location: location.get_untracked(),
        };
        let input = match validate(&draft) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = auth::update_profile(&input).await;
            busy.set(false);
            match result {
                Ok(user) => {
                    toasts.update(|t| {
                        t.success("Profile updated.");
                    });
                    on_saved.run(user);
                }
                Err(err) => {
                    leptos::logging::warn!("profile update failed: {err}");
                    toasts.update(|t| {
                        t.api_error(&err);
                    });
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Edit profile"</h2>
                <TextField label="Display name" value=display_name errors=errors field="display_name" />
                <TextField label="Location" value=location errors=errors field="location" />
                <TextArea label="Bio (markdown)" value=bio errors=errors field="bio" rows=6 />
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
