//! Public profile with the member's games. Members can edit their own.

use leptos::prelude::*;

use super::{AuthGate, NotFound, use_id_param};
use crate::components::feedback::{ErrorBanner, Spinner};
use crate::components::game_card::GameCard;
use crate::components::profile_form_dialog::ProfileFormDialog;
use crate::net::api::games::{self, GameQuery};
use crate::net::api::users;
use crate::net::error::ApiError;
use crate::net::types::{Game, PublicProfile, User};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::util::markdown::render_markdown_html;
use crate::util::mount_guard::MountGuard;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let id = use_id_param();
    view! {
        <AuthGate>
            {move || match id.get() {
                Some(user_id) => view! { <ProfileView user_id=user_id /> }.into_any(),
                None => view! { <NotFound /> }.into_any(),
            }}
        </AuthGate>
    }
}

#[component]
fn ProfileView(user_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = MountGuard::new();
    let profile = RwSignal::new(None::<PublicProfile>);
    let missing = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let shelf = RwSignal::new(ListState::<Game>::default());

    let load = move || {
        load_error.set(None);
        shelf.update(ListState::begin);
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let query = GameQuery { owner_id: Some(user_id), ..GameQuery::default() };
            let (found, owned) = futures::join!(users::get_profile(user_id), games::list_games(&query));
            if !guard.alive() {
                return;
            }
            match found {
                Ok(p) => profile.set(Some(p)),
                Err(ApiError::NotFound(_)) => missing.set(true),
                Err(err) => load_error.set(Some(err.user_message())),
            }
            match owned {
                Ok(page) => shelf.update(|l| l.loaded(page.items)),
                Err(err) => shelf.update(|l| l.failed(err.user_message())),
            }
        });
    };
    load();
    let reload = load.clone();
    let retry = Callback::new(move |()| load());

    let editing = RwSignal::new(false);
    let is_self = move || auth.with(|a| a.owns(user_id));
    let close_editor = Callback::new(move |()| editing.set(false));
    let on_saved = Callback::new(move |user: User| {
        auth.update(|a| a.signed_in(user));
        editing.set(false);
        reload();
    });

    view! {
        <Show when=move || !missing.get() fallback=|| view! { <NotFound /> }>
            <div class="page page--profile">
                <ErrorBanner message=load_error on_retry=retry />
                {move || profile.get().map(|p| {
                    let bio = p.bio.as_deref().map(render_markdown_html).unwrap_or_default();
                    view! {
                        <header class="profile__header">
                            {p.avatar_url.clone().map(|src| view! { <img class="profile__avatar" src=src alt="" /> })}
                            <div>
                                <h1>{p.label().to_owned()}</h1>
                                <p class="profile__username">"@" {p.username.clone()}</p>
                                {p.location.clone().map(|l| view! { <p class="profile__location">{l}</p> })}
                                <p class="profile__stats">
                                    {p.games_owned} " games · " {p.events_hosted} " events hosted"
                                </p>
                            </div>
                            <Show when=is_self>
                                <button class="btn" on:click=move |_| editing.set(true)>"Edit profile"</button>
                            </Show>
                        </header>
                        <div class="markdown" inner_html=bio></div>
                    }
                })}
                <section class="profile__shelf">
                    <h2>"Games"</h2>
                    <Show when=move || shelf.with(|l| l.loading)>
                        <Spinner />
                    </Show>
                    <Show when=move || shelf.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                        <p class="empty">"No games listed yet."</p>
                    </Show>
                    <div class="game-grid">
                        <For each=move || shelf.get().items key=|g| g.id let:game>
                            <GameCard game=game />
                        </For>
                    </div>
                </section>
                {move || {
                    let user = auth.with(|a| a.user.clone()).filter(|_| editing.get() && is_self())?;
                    Some(view! { <ProfileFormDialog user=user on_cancel=close_editor on_saved=on_saved /> })
                }}
            </div>
        </Show>
    }
}
