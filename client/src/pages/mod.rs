//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Authenticated pages wrap their body in [`AuthGate`], so
//! their data loads only start in the browser once a session is confirmed.

pub mod dashboard;
pub mod event_detail;
pub mod events;
pub mod game_detail;
pub mod games;
pub mod login;
pub mod people;
pub mod profile;
pub mod register;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::feedback::Spinner;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::util::auth::install_unauth_redirect;
use crate::util::mount_guard::MountGuard;

/// Renders `children` only for a signed-in user; otherwise waits for the
/// session check and then redirects to `/login`.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                let label = if auth.with(|a| a.checked && !a.loading) { "Redirecting to sign in..." } else { "Checking your session..." };
                view! { <Spinner label=label /> }
            }
        >
            {children()}
        </Show>
    }
}

/// `/` sends visitors to the dashboard or the login page once the session
/// state is known.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if state.loading || !state.checked {
            return;
        }
        let target = if state.is_authenticated() { "/dashboard" } else { "/login" };
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    view! { <Spinner /> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found."</h1>
            <a href="/">"Back to BoardShare"</a>
        </div>
    }
}

/// Fetch into a list state, ignoring the response if the page is gone.
pub(crate) fn load_list<T, Fut>(list: RwSignal<ListState<T>>, guard: &MountGuard, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    list.update(ListState::begin);
    let guard = guard.clone();
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if !guard.alive() {
            return;
        }
        match result {
            Ok(items) => list.update(|l| l.loaded(items)),
            Err(err) => list.update(|l| l.failed(err.user_message())),
        }
    });
}

/// Numeric `:id` route parameter.
pub(crate) fn use_id_param() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| parse_id(p.get("id").as_deref())))
}

pub(crate) fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}
