//! Create/edit game modal.

use leptos::prelude::*;

use crate::components::form_field::{TextArea, TextField};
use crate::forms::FormErrors;
use crate::forms::game::{GameDraft, validate};
use crate::net::api::games;
use crate::net::types::Game;
use crate::state::toast::ToastState;
use crate::util::format;

#[component]
pub fn GameFormDialog(
    /// `Some` edits this game; `None` creates a new one.
    existing: Option<Game>,
    on_cancel: Callback<()>,
    on_saved: Callback<Game>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing_id = existing.as_ref().map(|g| g.id);
    let initial = existing.as_ref().map(GameDraft::from_game).unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let min_players = RwSignal::new(initial.min_players);
    let max_players = RwSignal::new(initial.max_players);
    let playtime = RwSignal::new(initial.playtime_minutes);
    let year = RwSignal::new(initial.year_published);
    let image_url = RwSignal::new(initial.image_url);
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = GameDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            min_players: min_players.get_untracked(),
            max_players: max_players.get_untracked(),
            playtime_minutes: playtime.get_untracked(),
            year_published: year.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        let input = match validate(&draft, format::current_year()) {
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
                Some(id) => games::update_game(id, &input).await,
                None => games::create_game(&input).await,
            };
            busy.set(false);
            match result {
                Ok(game) => {
                    toasts.update(|t| {
                        t.success(if editing_id.is_some() { "Game updated." } else { "Game added." });
                    });
                    on_saved.run(game);
                }
                Err(err) => {
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
                <h2>{if editing_id.is_some() { "Edit game" } else { "Add a game" }}</h2>
                <TextField label="Title" value=title errors=errors field="title" />
                <div class="field-row">
                    <TextField label="Min players" value=min_players errors=errors field="min_players" input_type="number" />
                    <TextField label="Max players" value=max_players errors=errors field="max_players" input_type="number" />
                </div>
                <div class="field-row">
                    <TextField label="Playtime (min)" value=playtime errors=errors field="playtime_minutes" input_type="number" />
                    <TextField label="Year" value=year errors=errors field="year_published" input_type="number" />
                </div>
                <TextField label="Image URL" value=image_url errors=errors field="image_url" input_type="url" />
                <TextArea label="Description (markdown)" value=description errors=errors field="description" rows=6 />
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
