//! Labeled inputs bound to a `RwSignal<String>` with an inline error slot.

use leptos::prelude::*;

use crate::components::feedback::FieldError;
use crate::forms::FormErrors;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    field: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="field" class:field--invalid=move || errors.with(|e| e.has(field))>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                name=field
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError errors=errors field=field />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    field: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field" class:field--invalid=move || errors.with(|e| e.has(field))>
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                name=field
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldError errors=errors field=field />
        </label>
    }
}
