//! Lead capture showcase: an animated asset with a static marquee fallback

use leptos::prelude::*;

use crate::core::asset_watch::{AssetState, AssetWatch};
use crate::core::content::FALLBACK_LEADS;
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::BrowserTimer;

const ANIMATION_SRC: &str = "/animations/lead-capture.svg";

#[component]
fn LeadMarquee() -> impl IntoView {
    // Rendered twice so the scroll loops seamlessly
    let cards = || {
        FALLBACK_LEADS
            .iter()
            .map(|lead| view! {
                <div class="lead-card">
                    <Icon name=icons::USER class="w-8 h-8"/>
                    <div>
                        <p class="text-sm font-medium text-white">{lead.name}</p>
                        <p class="text-xs text-gray-400">{lead.role}" · "{lead.company}</p>
                    </div>
                </div>
            })
            .collect_view()
    };

    view! {
        <div class="marquee" aria-label="Captured leads">
            <div class="marquee-track">
                {cards()}
                {cards()}
            </div>
        </div>
    }
}

#[component]
pub fn LeadCapture() -> impl IntoView {
    let state = RwSignal::new(AssetState::Loading);
    let watch = AssetWatch::new(state, BrowserTimer);
    let image = NodeRef::<leptos::html::Img>::new();

    // The asset may finish loading before hydration attaches the handlers
    Effect::new(move |_| {
        watch.arm();
        if let Some(img) = image.get_untracked() {
            if img.complete() && img.natural_width() > 0 {
                watch.loaded();
            }
        }
    });

    view! {
        <section id="lead-capture" class="section">
            <div class="text-center mb-10">
                <span class="pill mb-4 inline-block">"Lead Capture"</span>
                <h2 class="section-title">"Every Card, Every Conversation, Captured"</h2>
                <p class="section-subtitle mx-auto max-w-2xl">
                    "Scan a business card, tap an NFC badge or forward an email. LeadQ turns it into a qualified lead."
                </p>
            </div>

            <Show
                when=move || !state.get().shows_fallback()
                fallback=|| view! { <LeadMarquee/> }
            >
                <img
                    node_ref=image
                    src=ANIMATION_SRC
                    alt="Business cards flowing into the LeadQ pipeline"
                    class="mx-auto w-full max-w-3xl rounded-2xl"
                    class:opacity-0=move || state.get() == AssetState::Loading
                    on:load=move |_| watch.loaded()
                    on:error=move |_| watch.failed()
                />
            </Show>
        </section>
    }
}
