//! Single game: info, availability, copies, borrowing, reviews.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{AuthGate, NotFound, load_list, use_id_param};
use crate::components::availability_badge::AvailabilityBadge;
use crate::components::borrow_request_dialog::BorrowRequestDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::components::game_form_dialog::GameFormDialog;
use crate::components::instance_list::InstanceList;
use crate::components::reviews::{ReviewForm, ReviewList};
use crate::net::api::{games, instances, reviews as reviews_api};
use crate::net::error::ApiError;
use crate::net::types::{BorrowRequest, Game, GameInstance, Review};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::markdown::render_markdown_html;
use crate::util::mount_guard::MountGuard;

/// One review per user per game.
pub(crate) fn has_reviewed(reviews: &[Review], user_id: Option<i64>) -> bool {
    user_id.is_some_and(|uid| reviews.iter().any(|r| r.user_id == uid))
}

#[component]
pub fn GameDetailPage() -> impl IntoView {
    let id = use_id_param();
    view! {
        <AuthGate>
            {move || match id.get() {
                Some(game_id) => view! { <GameDetailView game_id=game_id /> }.into_any(),
                None => view! { <NotFound /> }.into_any(),
            }}
        </AuthGate>
    }
}

#[component]
fn GameDetailView(game_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let guard = MountGuard::new();

    let game = RwSignal::new(None::<Game>);
    let load_error = RwSignal::new(None::<String>);
    let missing = RwSignal::new(false);
    let copies = RwSignal::new(ListState::<GameInstance>::default());
    let reviews = RwSignal::new(ListState::<Review>::default());
    let refresh = RwSignal::new(0_u32);
    let borrow_target = RwSignal::new(None::<GameInstance>);
    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let load_game = {
        let guard = guard.clone();
        move || {
            load_error.set(None);
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let result = games::get_game(game_id).await;
                guard.run(|| match result {
                    Ok(found) => game.set(Some(found)),
                    Err(ApiError::NotFound(_)) => missing.set(true),
                    Err(err) => load_error.set(Some(err.user_message())),
                });
            });
        }
    };

    load_game();
    load_list(copies, &guard, instances::list_instances(game_id));
    load_list(reviews, &guard, reviews_api::list_reviews(game_id));

    let retry = Callback::new(move |()| load_game());
    let bump = Callback::new(move |()| refresh.update(|n| *n = n.wrapping_add(1)));

    let on_borrow = Callback::new(move |instance: GameInstance| borrow_target.set(Some(instance)));
    let on_sent = Callback::new(move |_request: BorrowRequest| borrow_target.set(None));

    let on_saved = Callback::new(move |updated: Game| {
        editing.set(false);
        game.set(Some(updated));
    });

    let on_posted = Callback::new(move |review: Review| {
        reviews.update(|l| l.upsert_by(review, |r| r.id));
        // Server recomputes the average; refetch quietly.
        leptos::task::spawn_local(async move {
            if let Ok(fresh) = games::get_game(game_id).await {
                game.set(Some(fresh));
            }
        });
    });

    let on_delete = Callback::new(move |()| {
        deleting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match games::delete_game(game_id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Game deleted.");
                    });
                    navigate("/games", NavigateOptions::default());
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

    let is_owner = move || game.with(|g| g.as_ref().and_then(|g| g.owner_id).is_some_and(|owner| auth.with(|a| a.owns(owner))));
    let already_reviewed = move || reviews.with(|l| has_reviewed(&l.items, auth.with(AuthState::user_id)));

    view! {
        <Show when=move || !missing.get() fallback=|| view! { <NotFound /> }>
            <div class="page page--game-detail">
                <ErrorBanner message=load_error on_retry=retry />
                {move || match game.get() {
                    None => view! { <Spinner label="Loading game..." /> }.into_any(),
                    Some(g) => {
                        let title = g.title.clone();
                        let description = g.description.as_deref().map(render_markdown_html).unwrap_or_default();
                        view! {
                            <header class="page__header">
                                {g.image_url.clone().map(|src| view! { <img class="game-detail__image" src=src alt=title.clone() /> })}
                                <div>
                                    <h1>{title.clone()}</h1>
                                    <p class="game-detail__meta">
                                        {format::player_range(g.min_players, g.max_players)}
                                        {g.playtime_minutes.map(|m| format!(" · {}", format::playtime(m)))}
                                        {g.year_published.map(|y| format!(" · {y}"))}
                                    </p>
                                    <p class="game-detail__rating">
                                        {format::rating(g.average_rating)} " (" {g.review_count} " reviews)"
                                    </p>
                                    <AvailabilityBadge game_id=game_id refresh=refresh />
                                </div>
                                <Show when=is_owner>
                                    <div class="page__actions">
                                        <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                                        <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>"Delete"</button>
                                    </div>
                                </Show>
                            </header>
                            <div class="markdown" inner_html=description></div>
                        }
                        .into_any()
                    }
                }}
                <InstanceList game_id=game_id instances=copies on_borrow=on_borrow on_changed=bump />
                <section class="reviews">
                    <h2>"Reviews"</h2>
                    <Show when=move || !already_reviewed()>
                        <ReviewForm game_id=game_id on_posted=on_posted />
                    </Show>
                    <ReviewList reviews=reviews />
                </section>
                {move || borrow_target.get().map(|instance| {
                    let title = game.with(|g| g.as_ref().map(|g| g.title.clone()).unwrap_or_default());
                    view! {
                        <BorrowRequestDialog
                            instance=instance
                            game_title=title
                            on_cancel=Callback::new(move |()| borrow_target.set(None))
                            on_sent=on_sent
                        />
                    }
                })}
                <Show when=move || editing.get()>
                    <GameFormDialog
                        existing=game.get_untracked()
                        on_cancel=Callback::new(move |()| editing.set(false))
                        on_saved=on_saved
                    />
                </Show>
                <Show when=move || confirm_delete.get()>
                    <ConfirmDialog
                        title="Delete game"
                        message="Delete this game and all of its copies? This cannot be undone."
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

#[cfg(test)]
#[path = "game_detail_test.rs"]
mod game_detail_test;
