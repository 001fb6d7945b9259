use leptos::prelude::*;

use crate::core::contact::{ContactError, ContactField};
use crate::ui::icon::{Icon, icons};

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        _ => "text",
    }
}

fn error_id(field: ContactField) -> String {
    format!("{field}-error")
}

/// Label with the required marker
#[component]
fn FieldLabel(field: ContactField) -> impl IntoView {
    view! {
        <label class="label" for=field.to_string()>
            {field.label()}
            {field.is_required().then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(field: ContactField, error: Signal<Option<ContactError>>) -> impl IntoView {
    move || {
        error.get().map(|err| view! {
            <div id=error_id(field) class="flex items-center gap-1.5 text-sm text-red-400" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{err.to_string()}</span>
            </div>
        })
    }
}

/// Single line input bound to one contact field
#[component]
pub fn FormField(
    field: ContactField,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Validation error for this field
    error: Signal<Option<ContactError>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let invalid = move || error.get().is_some();

    view! {
        <div class="space-y-1.5">
            <FieldLabel field=field />
            <input
                id=field.to_string()
                name=field.to_string()
                type=input_type(field)
                class="input-base"
                class:border-red-500=invalid
                placeholder=field.placeholder()
                aria-invalid=move || invalid().to_string()
                aria-describedby=move || invalid().then(|| error_id(field))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError field=field error=error />
        </div>
    }
}

/// Multi line variant of [`FormField`]
#[component]
pub fn TextAreaField(
    field: ContactField,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<ContactError>>,
    #[prop(default = 5)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let invalid = move || error.get().is_some();

    view! {
        <div class="space-y-1.5">
            <FieldLabel field=field />
            <textarea
                id=field.to_string()
                name=field.to_string()
                class="input-base resize-none"
                class:border-red-500=invalid
                placeholder=field.placeholder()
                rows=rows
                aria-invalid=move || invalid().to_string()
                aria-describedby=move || invalid().then(|| error_id(field))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError field=field error=error />
        </div>
    }
}

/// Labelled toggle with an optional description
#[component]
pub fn CheckboxField(
    label: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    #[prop(default = false)]
    disabled: bool,
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="flex items-start gap-3 cursor-pointer">
            <input
                type="checkbox"
                class="mt-1 w-4 h-4 rounded accent-amber-500"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=disabled
            />
            <div class="flex-1">
                <span class="label">{label}</span>
                {description.map(|desc| view! {
                    <p class="text-sm text-gray-400 mt-0.5">{desc}</p>
                })}
            </div>
        </label>
    }
}
