//! Small feedback primitives: inline field errors, spinner, error banner.

use leptos::prelude::*;

use crate::forms::FormErrors;

/// Inline validation message for one form field.
#[component]
pub fn FieldError(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_owned));
    view! {
        <Show when=move || message().is_some()>
            <p class="field-error" role="alert">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="spinner" role="status">
            <span class="spinner__dot" aria-hidden="true"></span>
            <span class="spinner__label">{label}</span>
        </div>
    }
}

/// Error line for a failed list load, with an optional retry action.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                {on_retry.map(|cb| view! {
                    <button class="btn btn--small" on:click=move |_| cb.run(())>"Retry"</button>
                })}
            </div>
        </Show>
    }
}
