use leptos::prelude::*;

use super::{DemoHeader, DemoUnavailable, PlayButton, ProgressBar, StageIndicator, TypingIndicator};
use crate::core::demos::meeting::{
    self, Booking, MeetingStage, CONTEXT_LINKS, DASHBOARD_UPDATES, OFFLINE_BOOKING, ONLINE_BOOKING,
    PROOF, SUMMARY, SUMMARY_TRACK, TRANSCRIPT, TRANSCRIPT_TRACK,
};
use crate::core::sequencer::DemoStage;
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::use_demo;

const BADGE: &str = "Meeting Intelligence";
const TITLE: &str = "From Booking to Briefing";
const SUBTITLE: &str =
    "Watch the Meeting Agent capture a booking, pull in context, transcribe the call and file the summary.";

/// Meeting intelligence walkthrough
#[component]
pub fn MeetingDemo() -> impl IntoView {
    let Some(demo) = use_demo("meeting", meeting::script()) else {
        return view! {
            <section id="meeting-demo" class="section">
                <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE />
                <DemoUnavailable summary="Bookings, live transcription and AI summaries in one flow." />
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

    let booking = move || match stage.get() {
        MeetingStage::Idle => None,
        MeetingStage::BookingWebhook => Some(&ONLINE_BOOKING),
        _ => Some(&OFFLINE_BOOKING),
    };
    let context_reached = demo.reached(MeetingStage::ContextLinking);
    let transcript_reached = demo.reached(MeetingStage::LiveTranscription);
    let upload_reached = demo.reached(MeetingStage::ProofUpload);
    let summary_reached = demo.reached(MeetingStage::AiSummary);
    let dashboard_reached = demo.reached(MeetingStage::Dashboard);
    let run = demo.run;

    view! {
        <section id="meeting-demo" class="section" data-stage=move || stage.get().key()>
            <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE control=control />
            <StageIndicator steps=demo.indicator() />

            <div class="grid lg:grid-cols-3 gap-6">
                // Booking and linked context
                <div class="glass rounded-2xl p-6 space-y-4">
                    <h3 class="demo-panel-title">
                        <Icon name=icons::CALENDAR class="w-4 h-4"/>
                        "Booking"
                    </h3>
                    {move || match booking() {
                        Some(b) => view! { <BookingCard booking=b /> }.into_any(),
                        None => view! {
                            <p class="text-sm text-gray-500">"Waiting for a booking..."</p>
                        }.into_any(),
                    }}
                    <Show when=move || context_reached.get()>
                        <ul class="space-y-2">
                            {CONTEXT_LINKS.iter().map(|link| {
                                let shown = demo.is_revealed(link.key);
                                view! {
                                    <li class="reveal-item" class:revealed=move || shown.get()>
                                        <Icon name=icons::LINK class="w-4 h-4 shrink-0"/>
                                        <div>
                                            <p class="text-sm font-medium text-white">{link.label}</p>
                                            <p class="text-xs text-gray-400">{link.detail}</p>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </Show>
                </div>

                // Live transcript
                <div class="glass rounded-2xl p-6">
                    <h3 class="demo-panel-title">
                        <Icon name=icons::MIC class="w-4 h-4"/>
                        "Live Transcript"
                        <Show when=move || stage.get() == MeetingStage::LiveTranscription>
                            <span class="live-dot" aria-label="Recording"></span>
                        </Show>
                    </h3>
                    <Show
                        when=move || transcript_reached.get()
                        fallback=|| view! {
                            <p class="text-sm text-gray-500">"Transcription starts when the meeting does."</p>
                        }
                    >
                        <div class="space-y-3">
                            {move || run.with(|r| {
                                TRANSCRIPT
                                    .iter()
                                    .filter(|line| r.is_revealed(line.key))
                                    .map(|line| view! {
                                        <div class="transcript-line">
                                            <p class="text-xs text-amber-400 font-medium">{line.speaker}</p>
                                            <p class="text-sm text-gray-200">{line.text}</p>
                                        </div>
                                    })
                                    .collect_view()
                            })}
                            {move || run.with(|r| TRANSCRIPT_TRACK.is_typing(r))
                                .then(|| view! { <TypingIndicator/> })}
                        </div>
                    </Show>
                </div>

                // Proof, summary and dashboard
                <div class="glass rounded-2xl p-6 space-y-5">
                    <Show when=move || upload_reached.get()>
                        <div class="space-y-3">
                            <h3 class="demo-panel-title">
                                <Icon name=icons::UPLOAD class="w-4 h-4"/>
                                "Proof of Meeting"
                            </h3>
                            <div class="flex items-center gap-3 text-sm">
                                <Icon name=icons::FILE class="w-5 h-5"/>
                                <span class="text-white">{PROOF.name}</span>
                                <span class="text-gray-500 ml-auto">{PROOF.size}</span>
                            </div>
                            <ProgressBar value=demo.progress() label="Uploading" />
                        </div>
                    </Show>

                    <Show when=move || summary_reached.get()>
                        <div class="space-y-2">
                            <h3 class="demo-panel-title">
                                <Icon name=icons::SPARKLES class="w-4 h-4"/>
                                "AI Summary"
                            </h3>
                            <ul class="space-y-1.5">
                                {move || run.with(|r| {
                                    SUMMARY
                                        .iter()
                                        .filter(|b| r.is_revealed(b.key))
                                        .map(|b| view! {
                                            <li class="flex gap-2 text-sm text-gray-200">
                                                <Icon name=icons::CHECK class="w-4 h-4 shrink-0 mt-0.5"/>
                                                {b.text}
                                            </li>
                                        })
                                        .collect_view()
                                })}
                            </ul>
                            {move || run.with(|r| SUMMARY_TRACK.is_typing(r))
                                .then(|| view! { <TypingIndicator/> })}
                        </div>
                    </Show>

                    <Show when=move || dashboard_reached.get()>
                        <div class="rounded-xl border border-emerald-500/30 bg-emerald-500/5 p-4 space-y-2">
                            <p class="flex items-center gap-2 text-sm font-medium text-emerald-300">
                                <Icon name=icons::CHECK_CIRCLE class="w-4 h-4"/>
                                "Dashboard updated"
                            </p>
                            {DASHBOARD_UPDATES.iter().map(|u| view! {
                                <div class="flex justify-between text-xs">
                                    <span class="text-gray-400">{u.label}</span>
                                    <span class="text-white">{u.value}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn BookingCard(booking: &'static Booking) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-white/5 p-4 space-y-1">
            <p class="text-xs uppercase tracking-wide text-amber-400">{booking.channel}</p>
            <p class="text-white font-medium">{booking.contact}" · "{booking.company}</p>
            <p class="text-sm text-gray-300">{booking.slot}</p>
            <p class="text-xs text-gray-500">{booking.detail}</p>
        </div>
    }
}
