//! Physical copies of a game, with owner add/edit/delete and a borrow
//! action for everyone else.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{FieldError, Spinner};
use crate::components::form_field::TextArea;
use crate::forms::FormErrors;
use crate::forms::instance::{InstanceDraft, validate};
use crate::net::api::instances;
use crate::net::types::{GameInstance, InstanceCondition};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;

#[component]
pub fn InstanceList(
    game_id: i64,
    instances: RwSignal<ListState<GameInstance>>,
    /// Non-owners pick an instance to request.
    on_borrow: Callback<GameInstance>,
    /// Fired after any change so availability can refresh.
    on_changed: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing = RwSignal::new(None::<Option<GameInstance>>);
    let deleting = RwSignal::new(None::<i64>);
    let delete_busy = RwSignal::new(false);

    let on_saved = Callback::new(move |saved: GameInstance| {
        instances.update(|l| l.upsert_by(saved, |i| i.id));
        editing.set(None);
        on_changed.run(());
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        leptos::task::spawn_local(async move {
            let removed = instances.try_update(|l| l.remove_by(|i| i.id == id)).flatten();
            match instances::delete_instance(game_id, id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Copy removed.");
                    });
                    on_changed.run(());
                }
                Err(err) => {
                    if let Some((index, item)) = removed {
                        instances.update(|l| l.restore(index, item));
                    }
                    toasts.update(|t| {
                        t.api_error(&err);
                    });
                }
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    });

    view! {
        <section class="instance-list">
            <header class="section-header">
                <h3>"Copies"</h3>
                <Show when=move || auth.with(AuthState::is_authenticated)>
                    <button class="btn btn--small" on:click=move |_| editing.set(Some(None))>
                        "Add my copy"
                    </button>
                </Show>
            </header>
            <Show when=move || instances.with(|l| l.loading)>
                <Spinner />
            </Show>
            <Show when=move || instances.with(ListState::is_empty)>
                <p class="empty">"Nobody has listed a copy yet."</p>
            </Show>
            <ul class="instance-list__items">
                <For
                    each=move || instances.get().items
                    key=|i| (i.id, i.is_available, i.condition.as_str(), i.notes.clone())
                    children=move |instance| {
                        let mine = auth.with_untracked(|a| a.owns(instance.owner_id));
                        let id = instance.id;
                        let owner = instance.owner_username.clone().unwrap_or_else(|| format!("user #{}", instance.owner_id));
                        let owner_href = format!("/profile/{}", instance.owner_id);
                        let for_edit = instance.clone();
                        let for_borrow = instance.clone();
                        view! {
                            <li class="instance-list__item">
                                <span class="instance-list__condition">{instance.condition.label()}</span>
                                <a href=owner_href>{owner}</a>
                                <span class:badge--ok=instance.is_available class="badge">
                                    {if instance.is_available { "Available" } else { "Lent out" }}
                                </span>
                                {instance.notes.clone().map(|n| view! { <p class="instance-list__notes">{n}</p> })}
                                {if mine {
                                    view! {
                                        <button class="btn btn--small" on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--small btn--danger" on:click=move |_| deleting.set(Some(id))>
                                            "Remove"
                                        </button>
                                    }.into_any()
                                } else {
                                    view! {
                                        <button
                                            class="btn btn--small btn--primary"
                                            disabled=!instance.is_available
                                            on:click=move |_| on_borrow.run(for_borrow.clone())
                                        >
                                            "Request to borrow"
                                        </button>
                                    }.into_any()
                                }}
                            </li>
                        }
                    }
                />
            </ul>
            {move || editing.get().map(|existing| view! {
                <InstanceFormDialog
                    game_id=game_id
                    existing=existing
                    on_cancel=Callback::new(move |()| editing.set(None))
                    on_saved=on_saved
                />
            })}
            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Remove copy"
                    message="Remove this copy from the catalog? Pending requests for it will be cancelled."
                    confirm_label="Remove"
                    busy=Signal::derive(move || delete_busy.get())
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </section>
    }
}

#[component]
pub fn InstanceFormDialog(
    game_id: i64,
    existing: Option<GameInstance>,
    on_cancel: Callback<()>,
    on_saved: Callback<GameInstance>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing_id = existing.as_ref().map(|i| i.id);
    let initial = existing.as_ref().map(InstanceDraft::from_instance).unwrap_or_default();

    let condition = RwSignal::new(initial.condition);
    let notes = RwSignal::new(initial.notes);
    let is_available = RwSignal::new(initial.is_available);
    let errors = RwSignal::new(FormErrors::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = InstanceDraft {
            condition: condition.get_untracked(),
            notes: notes.get_untracked(),
            is_available: is_available.get_untracked(),
        };
        let input = match validate(&draft) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => instances::update_instance(game_id, id, &input).await,
                None => instances::create_instance(game_id, &input).await,
            };
            busy.set(false);
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(err) => toasts.update(|t| {
                    t.api_error(&err);
                }),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{if editing_id.is_some() { "Edit copy" } else { "Add my copy" }}</h2>
                <label class="field">
                    <span class="field__label">"Condition"</span>
                    <select
                        class="field__input"
                        prop:value=move || condition.get()
                        on:change=move |ev| condition.set(event_target_value(&ev))
                    >
                        {InstanceCondition::SELECTABLE
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <FieldError errors=errors field="condition" />
                </label>
                <TextArea label="Notes" value=notes errors=errors field="notes" rows=3 />
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_available.get()
                        on:change=move |ev| is_available.set(event_target_checked(&ev))
                    />
                    <span>"Available to lend"</span>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
