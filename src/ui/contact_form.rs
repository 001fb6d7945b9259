//! Contact section form
//!
//! Field values, errors and the submit status live in one
//! `RwSignal<ContactFormState>` driven by a [`ContactFormController`].

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::contact::{
    ContactField, ContactFormController, ContactFormState, FormStatus, SubmitOutcome,
};
use crate::ui::common::{FormField, Spinner, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::BrowserTimer;

type PageContactForm = ContactFormController<RwSignal<ContactFormState>, BrowserTimer>;

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let controller: PageContactForm = ContactFormController::new(state, BrowserTimer);

    let status = Signal::derive(move || state.with(|s| s.status));
    let sending = Signal::derive(move || status.get() == FormStatus::Sending);

    let value = move |field: ContactField| {
        Signal::derive(move || state.with(|s| s.form.get(field).to_string()))
    };
    let error = move |field: ContactField| Signal::derive(move || state.with(|s| s.error(field)));
    let on_input =
        move |field: ContactField| Callback::new(move |text: String| controller.edit(field, text));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match controller.submit() {
            SubmitOutcome::Accepted => log!("contact form sending"),
            SubmitOutcome::Rejected(errors) => log!("contact form rejected: {} field(s)", errors.len()),
            SubmitOutcome::Ignored => {}
        }
    };

    view! {
        <section id="contact" class="section">
            <div class="grid lg:grid-cols-2 gap-12 items-start">
                <div>
                    <span class="pill mb-4 inline-block">"Contact"</span>
                    <h2 class="section-title">"Talk to the Team"</h2>
                    <p class="section-subtitle">
                        "Tell us about your pipeline and we'll show you what your agents could take off your plate."
                    </p>
                    <ul class="mt-8 space-y-3 text-sm text-gray-300">
                        <li class="flex items-center gap-2">
                            <Icon name=icons::MAIL class="w-4 h-4"/>
                            "hello@leadq.ai"
                        </li>
                        <li class="flex items-center gap-2">
                            <Icon name=icons::CALENDAR class="w-4 h-4"/>
                            "Replies within one business day"
                        </li>
                    </ul>
                </div>

                <div class="glass rounded-2xl p-8">
                    <Show
                        when=move || status.get() != FormStatus::Success
                        fallback=|| view! {
                            <div class="text-center py-12 space-y-3" role="status">
                                <Icon name=icons::CHECK_CIRCLE class="w-12 h-12 mx-auto"/>
                                <h3 class="text-xl font-semibold text-white">"Message Sent!"</h3>
                                <p class="text-gray-400">"Thanks for reaching out. We'll be in touch shortly."</p>
                            </div>
                        }
                    >
                        <form class="space-y-5" novalidate=true on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-5">
                                <FormField
                                    field=ContactField::Name
                                    value=value(ContactField::Name)
                                    on_input=on_input(ContactField::Name)
                                    error=error(ContactField::Name)
                                    disabled=sending
                                />
                                <FormField
                                    field=ContactField::Email
                                    value=value(ContactField::Email)
                                    on_input=on_input(ContactField::Email)
                                    error=error(ContactField::Email)
                                    disabled=sending
                                />
                            </div>
                            <FormField
                                field=ContactField::Company
                                value=value(ContactField::Company)
                                on_input=on_input(ContactField::Company)
                                error=error(ContactField::Company)
                                disabled=sending
                            />
                            <TextAreaField
                                field=ContactField::Message
                                value=value(ContactField::Message)
                                on_input=on_input(ContactField::Message)
                                error=error(ContactField::Message)
                                disabled=sending
                            />
                            <button type="submit" class="btn-primary w-full justify-center" disabled=move || sending.get()>
                                {move || if sending.get() {
                                    view! { <Spinner label="Sending..."/> }.into_any()
                                } else {
                                    view! {
                                        <Icon name=icons::SEND class="w-4 h-4"/>
                                        <span>"Send Message"</span>
                                    }.into_any()
                                }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </section>
    }
}
