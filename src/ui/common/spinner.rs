use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 animate-spin",
            SpinnerSize::Medium => "w-6 h-6 animate-spin",
            SpinnerSize::Large => "w-10 h-10 animate-spin",
        }
    }
}

/// Rotating loader icon with an optional label
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Small)]
    size: SpinnerSize,
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2" role="status" aria-live="polite">
            <Icon name=icons::LOADER class=size.class()/>
            {match label {
                Some(text) => view! { <span>{text}</span> }.into_any(),
                None => view! { <span class="sr-only">"Loading..."</span> }.into_any(),
            }}
        </span>
    }
}
