//! Account creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::forms::FormErrors;
use crate::forms::register::{RegisterDraft, validate};
use crate::net::api::auth;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        let draft = RegisterDraft {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
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
            match auth::register(&input).await {
                Ok(user) => {
                    auth_state.update(|a| a.signed_in(user));
                    toasts.update(|t| {
                        t.success("Welcome to BoardShare!");
                    });
                }
                Err(err) => info.set(err.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join BoardShare"</h1>
                <form class="login-form" on:submit=on_submit>
                    <TextField label="Username" value=username errors=errors field="username" />
                    <TextField label="Email" value=email errors=errors field="email" input_type="email" />
                    <TextField label="Password" value=password errors=errors field="password" input_type="password" />
                    <TextField
                        label="Confirm password"
                        value=confirm
                        errors=errors
                        field="confirm_password"
                        input_type="password"
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already a member? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
