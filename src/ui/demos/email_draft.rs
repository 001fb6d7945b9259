use leptos::prelude::*;

use super::{DemoHeader, DemoUnavailable, PlayButton, ProgressBar, StageIndicator, TypingIndicator};
use crate::core::demos::AttachmentKind;
use crate::core::demos::email_draft::{
    self, ATTACHMENTS, ATTACHMENTS_KEY, CONTACT, EmailStage, SECTION_TRACK, SECTIONS, SUBJECT, SUBJECT_KEY,
};
use crate::core::sequencer::DemoStage;
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::use_demo;

const BADGE: &str = "Email Agent";
const TITLE: &str = "Follow-ups That Write Themselves";
const SUBTITLE: &str =
    "From meeting notes to a personalised follow-up with attachments, drafted and sent in seconds.";

/// Follow-up email walkthrough
#[component]
pub fn EmailDraftDemo() -> impl IntoView {
    let Some(demo) = use_demo("email", email_draft::script()) else {
        return view! {
            <section id="email-demo" class="section">
                <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE />
                <DemoUnavailable summary="Personalised follow-ups drafted from your meeting context." />
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

    let contact_reached = demo.reached(EmailStage::Contact);
    let subject_shown = demo.is_revealed(SUBJECT_KEY);
    let attachments_shown = demo.is_revealed(ATTACHMENTS_KEY);
    let sending = Signal::derive(move || stage.get() == EmailStage::Delivery);
    let sent = Signal::derive(move || stage.get() == EmailStage::Complete);
    let run = demo.run;

    view! {
        <section id="email-demo" class="section" data-stage=move || stage.get().key()>
            <DemoHeader badge=BADGE title=TITLE subtitle=SUBTITLE control=control />
            <StageIndicator steps=demo.indicator() />

            <div class="grid lg:grid-cols-3 gap-6">
                <aside class="glass rounded-2xl p-6 space-y-3" class:opacity-40=move || !contact_reached.get()>
                    <h3 class="demo-panel-title">
                        <Icon name=icons::USER class="w-4 h-4"/>
                        "Contact"
                    </h3>
                    <p class="text-white font-medium">{CONTACT.name}</p>
                    <p class="text-sm text-gray-400">{CONTACT.email}</p>
                    <p class="text-sm text-gray-400">{CONTACT.company}</p>
                    <div class="pt-3 border-t border-white/10 text-xs text-gray-500 space-y-1">
                        <p>"Last meeting: "{CONTACT.meeting_date}</p>
                        <p>{CONTACT.meeting_type}</p>
                    </div>
                </aside>

                <div class="glass rounded-2xl p-6 lg:col-span-2 space-y-4">
                    <div class="flex items-center gap-2 text-sm border-b border-white/10 pb-3">
                        <Icon name=icons::MAIL class="w-4 h-4"/>
                        <span class="text-gray-500">"Subject:"</span>
                        <span class="text-white" class:invisible=move || !subject_shown.get()>{SUBJECT}</span>
                    </div>

                    <div class="space-y-4 min-h-48">
                        {move || run.with(|r| {
                            SECTIONS
                                .iter()
                                .filter(|s| r.is_revealed(s.key))
                                .map(|s| view! {
                                    <div class="reveal-item revealed flex-col items-start">
                                        <p class="text-xs uppercase tracking-wide text-amber-400">{s.title}</p>
                                        <p class="text-sm text-gray-200">{s.content}</p>
                                    </div>
                                })
                                .collect_view()
                        })}
                        {move || run.with(|r| SECTION_TRACK.is_typing(r))
                            .then(|| view! { <TypingIndicator/> })}
                    </div>

                    <Show when=move || attachments_shown.get()>
                        <ul class="flex flex-wrap gap-3">
                            {ATTACHMENTS.iter().map(|a| {
                                let icon = match a.kind {
                                    AttachmentKind::Image => icons::UPLOAD,
                                    AttachmentKind::Pdf | AttachmentKind::Document => icons::FILE,
                                };
                                view! {
                                    <li class="flex items-center gap-2 rounded-lg bg-white/5 px-3 py-2 text-sm">
                                        <Icon name=icon class="w-4 h-4"/>
                                        <span class="text-white">{a.name}</span>
                                        <span class="text-xs text-gray-500">{format!("{} · {}", a.kind, a.size)}</span>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </Show>

                    <Show when=move || sending.get()>
                        <ProgressBar value=demo.progress() label="Sending" />
                    </Show>
                    <Show when=move || sent.get()>
                        <p class="flex items-center gap-2 text-sm text-emerald-300" role="status">
                            <Icon name=icons::CHECK_CIRCLE class="w-4 h-4"/>
                            {format!("Sent to {}", CONTACT.email)}
                        </p>
                    </Show>
                </div>
            </div>
        </section>
    }
    .into_any()
}
