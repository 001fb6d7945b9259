use leptos::prelude::*;

use super::{DemoHeader, DemoUnavailable, PlayButton, StageIndicator, TypingIndicator};
use crate::core::demos::profile_research::{
    self, CANDIDATES, ENRICHED_FIELDS, FIELD_TRACK, INPUT_PROFILE, ResearchStage, SELECTED_CANDIDATE_KEY,
    SOURCE_TRACK, SOURCES,
};
use crate::core::sequencer::DemoStage;
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::use_demo;

const BADGE: &str = "Profile Research";
const TITLE: &str = "One Name In, Full Profile Out";
const SUBTITLE: &str =
    "The Research Agent searches, disambiguates and enriches a lead before your first touch.";

/// Lead enrichment walkthrough
#[component]
pub fn ProfileResearchDemo() -> impl IntoView {
    let Some(demo) = use_demo("research", profile_research::script()) else {
        return view! {
            <section id="research-demo" class="section">
                <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE />
                <DemoUnavailable summary="Search, disambiguation and enrichment from a single name." />
            </section>
        }
        .into_any();
    };

    let stage = demo.stage();
    let on_play = Callback::new(move |_| demo.play());
    let control = view! {
        <PlayButton started=demo.has_started() running=demo.is_running() on_play=on_play />
    }
    .into_any();

    let input_reached = demo.reached(ResearchStage::Input);
    let research_reached = demo.reached(ResearchStage::Researching);
    let candidates_reached = demo.reached(ResearchStage::Disambiguating);
    let enrich_reached = demo.reached(ResearchStage::Enriching);
    let selected = demo.is_revealed(SELECTED_CANDIDATE_KEY);
    let run = demo.run;

    view! {
        <section id="research-demo" class="section" data-stage=move || stage.get().key()>
            <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE control=control />
            <StageIndicator steps=demo.indicator() />

            <p class="text-sm text-amber-300 mb-4" aria-live="polite">
                {move || stage.get().status_text()}
            </p>

            <div class="grid lg:grid-cols-2 gap-6">
                <div class="space-y-6">
                    <div class="glass rounded-2xl p-6" class:opacity-40=move || !input_reached.get()>
                        <h3 class="demo-panel-title">
                            <Icon name=icons::USER class="w-4 h-4"/>
                            "Lead Input"
                        </h3>
                        <dl class="grid grid-cols-3 gap-3 text-sm">
                            <div><dt class="text-gray-500">"Name"</dt><dd class="text-white">{INPUT_PROFILE.name}</dd></div>
                            <div><dt class="text-gray-500">"Company"</dt><dd class="text-white">{INPUT_PROFILE.company}</dd></div>
                            <div><dt class="text-gray-500">"Role"</dt><dd class="text-white">{INPUT_PROFILE.role}</dd></div>
                        </dl>
                    </div>

                    <Show when=move || research_reached.get()>
                        <div class="glass rounded-2xl p-6">
                            <h3 class="demo-panel-title">
                                <Icon name=icons::SEARCH class="w-4 h-4"/>
                                "Sources"
                            </h3>
                            <ul class="space-y-2">
                                {SOURCES.iter().map(|source| {
                                    let done = demo.is_revealed(source.key);
                                    view! {
                                        <li class="flex items-center justify-between text-sm">
                                            <span class="text-gray-200">{source.name}</span>
                                            {move || if done.get() {
                                                view! { <Icon name=icons::CHECK_CIRCLE class="w-4 h-4"/> }.into_any()
                                            } else {
                                                view! { <Icon name=icons::LOADER class="w-4 h-4 animate-spin"/> }.into_any()
                                            }}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            {move || run.with(|r| SOURCE_TRACK.is_typing(r))
                                .then(|| view! { <TypingIndicator/> })}
                        </div>
                    </Show>

                    <Show when=move || candidates_reached.get()>
                        <div class="glass rounded-2xl p-6 space-y-3">
                            <h3 class="demo-panel-title">"Possible Matches"</h3>
                            {CANDIDATES.iter().map(|c| {
                                let is_selected = move || c.is_match && selected.get();
                                let is_rejected = move || !c.is_match && selected.get();
                                view! {
                                    <div
                                        class="candidate-card"
                                        class:selected=is_selected
                                        class:opacity-40=is_rejected
                                        data-candidate=c.key
                                    >
                                        <div>
                                            <p class="text-white text-sm font-medium">{c.name}</p>
                                            <p class="text-xs text-gray-400">{c.role}" · "{c.company}</p>
                                        </div>
                                        <span class="text-xs font-mono text-gray-300">{format!("{}%", c.confidence)}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <div class="glass rounded-2xl p-6">
                    <h3 class="demo-panel-title">
                        <Icon name=icons::SPARKLES class="w-4 h-4"/>
                        "Enriched Profile"
                    </h3>
                    <Show
                        when=move || enrich_reached.get()
                        fallback=|| view! {
                            <p class="text-sm text-gray-500">"Enrichment starts once the right person is confirmed."</p>
                        }
                    >
                        <dl class="space-y-3">
                            {move || run.with(|r| {
                                ENRICHED_FIELDS
                                    .iter()
                                    .filter(|f| r.is_revealed(f.key))
                                    .map(|f| view! {
                                        <div class="reveal-item revealed">
                                            <dt class="text-xs text-gray-500 w-28 shrink-0">{f.label}</dt>
                                            <dd class="text-sm text-gray-100">{f.value}</dd>
                                        </div>
                                    })
                                    .collect_view()
                            })}
                        </dl>
                        {move || run.with(|r| FIELD_TRACK.is_typing(r))
                            .then(|| view! { <TypingIndicator/> })}
                    </Show>
                </div>
            </div>
        </section>
    }
    .into_any()
}
