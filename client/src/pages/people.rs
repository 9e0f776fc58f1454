//! Member search.

use leptos::prelude::*;

use super::AuthGate;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::net::api::users;
use crate::net::types::PublicProfile;
use crate::state::listing::ListState;
use crate::util::debounce::{Debouncer, debounce};
use crate::util::mount_guard::MountGuard;

#[component]
pub fn PeoplePage() -> impl IntoView {
    view! {
        <AuthGate>
            <PeopleView />
        </AuthGate>
    }
}

#[component]
fn PeopleView() -> impl IntoView {
    let guard = MountGuard::new();
    let debouncer = Debouncer::new();
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(ListState::<PublicProfile>::default());

    on_cleanup({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        if value.trim().is_empty() {
            debouncer.cancel();
            results.set(ListState::default());
            return;
        }
        let guard = guard.clone();
        let current = debouncer.clone();
        debounce(&debouncer, SEARCH_DEBOUNCE_MS, move |ticket| async move {
            results.update(ListState::begin);
            let found = users::search_users(&value).await;
            if !guard.alive() || !current.is_current(ticket) {
                return;
            }
            match found {
                Ok(items) => results.update(|l| l.loaded(items)),
                Err(err) => results.update(|l| l.failed(err.user_message())),
            }
        });
    };

    let error = Signal::derive(move || results.with(|l| l.error.clone()));

    view! {
        <div class="page page--people">
            <header class="page__header">
                <h1>"People"</h1>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search by username or name..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <ErrorBanner message=error />
            <Show when=move || results.with(|l| l.loading)>
                <Spinner />
            </Show>
            <Show when=move || {
                !query.with(|q| q.trim().is_empty()) && results.with(|l| !l.loading && l.error.is_none() && l.is_empty())
            }>
                <p class="empty-state">"No members found."</p>
            </Show>
            <ul class="people-list">
                <For each=move || results.get().items key=|p| p.id let:person>
                    <li class="people-list__item">
                        <a href=format!("/profile/{}", person.id)>{person.label().to_owned()}</a>
                        <span class="people-list__username">"@" {person.username.clone()}</span>
                        {person.location.clone().map(|l| view! { <span class="people-list__location">{l}</span> })}
                    </li>
                </For>
            </ul>
        </div>
    }
}
