//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::forms::FormErrors;
use crate::forms::login::{LoginDraft, validate};
use crate::net::api::auth;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Incorrect username or password.".to_owned()
    } else {
        err.user_message()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (or just signed in): go to the dashboard.
    Effect::new(move || {
        if auth_state.with(AuthState::is_authenticated) {
            navigate("/dashboard", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = LoginDraft { username: username.get_untracked(), password: password.get_untracked() };
        let input = match validate(&draft) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        info.set(String::new());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth::login(&input).await {
                Ok(user) => {
                    let name = user.label().to_owned();
                    auth_state.update(|a| a.signed_in(user));
                    toasts.update(|t| {
                        t.success(format!("Welcome back, {name}!"));
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    info.set(login_error_message(&err));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"BoardShare"</h1>
                <p class="login-card__subtitle">"Sign in to borrow games and join events"</p>
                <Show when=move || auth_state.with(|a| a.expired)>
                    <p class="login-message login-message--warn">
                        "Your session expired. Please sign in again."
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <TextField label="Username or email" value=username errors=errors field="username" />
                    <TextField label="Password" value=password errors=errors field="password" input_type="password" />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
