//! Form building blocks shared by the auth, detail, and contact pages.
//!
//! DESIGN
//! ======
//! Each input owns its value signal and reads its message from the page's
//! `FieldErrors` signal. Editing an input clears only that field's message and
//! then runs the page's `on_edit` hook (used to dismiss provider banners).

use leptos::prelude::*;

use crate::state::forms::{Field, FieldErrors};

/// Delay of the simulated request behind the try-now and contact forms.
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;
/// How long the success banner stays up after a simulated submit.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

fn edited(field: Option<Field>, errors: RwSignal<FieldErrors>, on_edit: Option<Callback<()>>) {
    if let Some(field) = field
        && errors.with_untracked(|e| e.get(field).is_some())
    {
        errors.update(|e| e.clear(field));
    }
    if let Some(on_edit) = on_edit {
        on_edit.run(());
    }
}

#[component]
pub fn FormField(
    label: &'static str,
    field: Field,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));
    let on_input = move |ev: leptos::ev::Event| {
        value.set(event_target_value(&ev));
        edited(Some(field), errors, on_edit);
    };

    let input = if multiline {
        view! {
            <textarea
                class="textarea"
                class:input--error=move || message().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="input"
                class:input--error=move || message().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            {input}
            {move || message().map(|msg| view! { <span class="label-text-alt text-error">{msg}</span> })}
        </div>
    }
}

/// Drop-down of `(value, label)` options; the first option is the empty prompt.
#[component]
pub fn SelectField(
    label: &'static str,
    field: Field,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select"
                class:input--error=move || message().is_some()
                prop:value=move || value.get()
                on:change=move |ev| {
                    value.set(event_target_value(&ev));
                    edited(Some(field), errors, None);
                }
            >
                {options
                    .iter()
                    .map(|(option, text)| view! { <option value=*option>{*text}</option> })
                    .collect_view()}
            </select>
            {move || message().map(|msg| view! { <span class="label-text-alt text-error">{msg}</span> })}
        </div>
    }
}

/// Checkbox; `field` is omitted for options that are never validated.
#[component]
pub fn CheckboxField(
    #[prop(optional)] field: Option<Field>,
    checked: RwSignal<bool>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let message = move || field.and_then(|field| errors.with(|e| e.get(field)));
    view! {
        <div class="form-control">
            <label class="label label--checkbox">
                <input
                    type="checkbox"
                    class="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        checked.set(event_target_checked(&ev));
                        edited(field, errors, on_edit);
                    }
                />
                <span class="label-text">{children()}</span>
            </label>
            {move || message().map(|msg| view! { <span class="label-text-alt text-error">{msg}</span> })}
        </div>
    }
}

/// Provider error banner; hidden while empty.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <div class="alert alert-error" role="alert">{msg}</div> })
}

/// Fake a request for forms with no backend: wait, then reset the form and show
/// the success banner for a while.
pub fn run_simulated_submit<R>(submitting: RwSignal<bool>, success: RwSignal<bool>, reset: R)
where
    R: FnOnce() + 'static,
{
    submitting.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SIMULATED_SUBMIT_MS).await;
        reset();
        success.set(true);
        submitting.set(false);
        gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
        success.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        reset();
        success.set(true);
        submitting.set(false);
    }
}
