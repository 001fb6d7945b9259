//! Scripted demo components and their shared presentation kit

mod email_draft;
mod meeting;
mod profile_research;

pub use email_draft::EmailDraftDemo;
pub use meeting::MeetingDemo;
pub use profile_research::ProfileResearchDemo;

use leptos::prelude::*;

use crate::core::sequencer::{IndicatorStep, StepStatus};
use crate::ui::icon::{Icon, icons};

/// Header shared by the three demos
#[component]
fn DemoHeader(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    /// Play/replay control, absent when the demo is disabled
    #[prop(optional)]
    control: Option<AnyView>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row md:items-end justify-between gap-6 mb-8">
            <div>
                <span class="pill mb-4 inline-block">{badge}</span>
                <h2 class="section-title">{title}</h2>
                <p class="section-subtitle max-w-2xl">{subtitle}</p>
            </div>
            {control}
        </div>
    }
}

/// Pills for every stage after idle, coloured by status
#[component]
fn StageIndicator(steps: Signal<Vec<IndicatorStep>>) -> impl IntoView {
    view! {
        <ol class="flex flex-wrap gap-2 mb-6" aria-label="Demo stages">
            <For
                each=move || steps.get()
                key=|step| (step.key, step.status)
                children=|step| {
                    let status = match step.status {
                        StepStatus::Done => "done",
                        StepStatus::Active => "active",
                        StepStatus::Pending => "pending",
                    };
                    view! {
                        <li class="stage-pill" data-status=status data-stage=step.key>
                            {(step.status == StepStatus::Done)
                                .then(|| view! { <Icon name=icons::CHECK class="w-3.5 h-3.5"/> })}
                            <span>{step.label}</span>
                        </li>
                    }
                }
            />
        </ol>
    }
}

/// Three bouncing dots
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-dots" role="status" aria-label="Typing">
            <span></span>
            <span></span>
            <span></span>
        </div>
    }
}

#[component]
fn PlayButton(started: Signal<bool>, running: Signal<bool>, on_play: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn-primary"
            on:click=move |_| on_play.run(())
            aria-live="polite"
        >
            {move || {
                if started.get() {
                    view! {
                        <Icon name=icons::ROTATE class="w-4 h-4"/>
                        <span>{if running.get() { "Restart" } else { "Replay" }}</span>
                    }
                    .into_any()
                } else {
                    view! {
                        <Icon name=icons::PLAY class="w-4 h-4"/>
                        <span>"Play Demo"</span>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}

#[component]
fn ProgressBar(
    value: Signal<u8>,
    #[prop(default = "Progress")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <div class="flex justify-between text-xs text-gray-400">
                <span>{label}</span>
                <span>{move || format!("{}%", value.get())}</span>
            </div>
            <div
                class="progress-track"
                role="progressbar"
                aria-label=label
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || value.get().to_string()
            >
                <div class="progress-fill" style:width=move || format!("{}%", value.get())></div>
            </div>
        </div>
    }
}

/// Shown in place of the animation when a demo script is rejected
#[component]
fn DemoUnavailable(summary: &'static str) -> impl IntoView {
    view! {
        <div class="glass rounded-2xl p-8 text-center text-gray-400">
            <Icon name=icons::SPARKLES class="w-8 h-8 mx-auto mb-4"/>
            <p>{summary}</p>
        </div>
    }
}
