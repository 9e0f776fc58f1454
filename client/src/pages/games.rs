//! Game catalog: debounced search, paging, create, copy to shelf.

use leptos::prelude::*;

use super::AuthGate;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::components::game_card::GameCard;
use crate::components::game_form_dialog::GameFormDialog;
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::net::api::games::{self, GameQuery};
use crate::net::types::Game;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::debounce::{Debouncer, debounce};
use crate::util::mount_guard::MountGuard;
use crate::util::storage;

/// Trimmed search text, or `None` when blank.
pub(crate) fn normalize_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Whether the backend has more items beyond those already shown.
pub(crate) fn has_more(loaded: usize, total: u64) -> bool {
    (loaded as u64) < total
}

#[component]
pub fn GamesPage() -> impl IntoView {
    view! {
        <AuthGate>
            <GamesView />
        </AuthGate>
    }
}

#[component]
fn GamesView() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let guard = MountGuard::new();
    let debouncer = Debouncer::new();

    let search = RwSignal::new(storage::GAMES_SEARCH.load().unwrap_or_default());
    let list = RwSignal::new(ListState::<Game>::default());
    let total = RwSignal::new(0_u64);
    let page = RwSignal::new(1_u32);
    let creating = RwSignal::new(false);
    let copying = RwSignal::new(None::<i64>);

    // Fetch `page_no` for the current search; page 1 replaces, later pages append.
    let fetch_page = {
        let guard = guard.clone();
        let debouncer = debouncer.clone();
        move |page_no: u32| {
            let query = GameQuery {
                search: normalize_search(&search.get_untracked()),
                owner_id: None,
                page: (page_no > 1).then_some(page_no),
            };
            let ticket = debouncer.next();
            let guard = guard.clone();
            let debouncer = debouncer.clone();
            list.update(ListState::begin);
            leptos::task::spawn_local(async move {
                let result = games::list_games(&query).await;
                if !guard.alive() || !debouncer.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(found) => {
                        total.set(found.total);
                        page.set(page_no);
                        list.update(|l| {
                            if page_no > 1 {
                                let mut items = std::mem::take(&mut l.items);
                                items.extend(found.items);
                                l.loaded(items);
                            } else {
                                l.loaded(found.items);
                            }
                        });
                    }
                    Err(err) => list.update(|l| l.failed(err.user_message())),
                }
            });
        }
    };

    fetch_page(1);

    let on_search = {
        let debouncer = debouncer.clone();
        let fetch_page = fetch_page.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            if value.trim().is_empty() {
                storage::GAMES_SEARCH.clear();
            } else {
                storage::GAMES_SEARCH.save(&value);
            }
            search.set(value);
            let fetch_page = fetch_page.clone();
            debounce(&debouncer, SEARCH_DEBOUNCE_MS, move |_ticket| async move { fetch_page(1) });
        }
    };

    on_cleanup({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });

    let retry = Callback::new({
        let fetch_page = fetch_page.clone();
        move |()| fetch_page(1)
    });
    let load_more = {
        let fetch_page = fetch_page.clone();
        move |_| fetch_page(page.get_untracked() + 1)
    };

    let on_copy = Callback::new(move |game_id: i64| {
        if copying.get_untracked().is_some() {
            return;
        }
        copying.set(Some(game_id));
        leptos::task::spawn_local(async move {
            let result = games::copy_game(game_id).await;
            copying.set(None);
            toasts.update(|t| match result {
                Ok(_) => {
                    t.success("Added a copy to your shelf.");
                }
                Err(err) => {
                    t.api_error(&err);
                }
            });
        });
    });

    let on_saved = Callback::new(move |game: Game| {
        creating.set(false);
        total.update(|t| *t += 1);
        list.update(|l| l.upsert_by(game, |g| g.id));
    });

    let error = Signal::derive(move || list.with(|l| l.error.clone()));

    view! {
        <div class="page page--games">
            <header class="page__header">
                <h1>"Games"</h1>
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                    "Add game"
                </button>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search games..."
                prop:value=move || search.get()
                on:input=on_search
            />
            <ErrorBanner message=error on_retry=retry />
            <Show when=move || list.with(|l| l.loading && l.items.is_empty())>
                <Spinner label="Loading games..." />
            </Show>
            <Show when=move || list.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                <p class="empty-state">
                    {move || if search.with(|s| s.trim().is_empty()) { "No games yet." } else { "No games match your search." }}
                </p>
            </Show>
            <div class="game-grid">
                <For each=move || list.get().items key=|game| game.id let:game>
                    <GameCard game=game on_copy=on_copy />
                </For>
            </div>
            <Show when=move || list.with(|l| has_more(l.items.len(), total.get()))>
                <button class="btn" disabled=move || list.with(|l| l.loading) on:click=load_more.clone()>
                    "Load more"
                </button>
            </Show>
            <Show when=move || creating.get()>
                <GameFormDialog existing=None on_cancel=Callback::new(move |()| creating.set(false)) on_saved=on_saved />
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;
