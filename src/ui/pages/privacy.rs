//! Privacy policy page

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::consent::CONSENT_STORAGE_KEY;
use crate::core::content::COPYRIGHT;
use crate::ui::icon::{Icon, icons};

struct PolicySection {
    heading: &'static str,
    body: &'static [&'static str],
}

const LAST_UPDATED: &str = "January 15, 2026";

const SECTIONS: &[PolicySection] = &[
    PolicySection {
        heading: "Information We Collect",
        body: &[
            "Details you give us through the contact form: your name, email address, company and message.",
            "Technical data your browser sends with every request, such as IP address, browser type and pages visited.",
        ],
    },
    PolicySection {
        heading: "How We Use It",
        body: &[
            "To answer your enquiry and, if you ask for one, arrange a product demo.",
            "To keep the site secure and working, and, with your consent, to understand how it is used.",
        ],
    },
    PolicySection {
        heading: "Cookies",
        body: &[
            "Essential cookies are always on. Analytics and marketing cookies are only used if you allow them in the cookie banner.",
            "Your choice is stored in your browser and can be changed at any time by clearing site data.",
        ],
    },
    PolicySection {
        heading: "Data Sharing",
        body: &[
            "We never sell your data. Processors acting on our behalf are bound by data processing agreements.",
        ],
    },
    PolicySection {
        heading: "Your Rights",
        body: &[
            "You may request access to, correction of, or deletion of your personal data by emailing privacy@leadq.ai.",
        ],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy - LeadQ.AI" />
        <Meta name="description" content="How LeadQ.AI collects, uses and protects your personal data." />

        <main id="main-content" class="max-w-3xl mx-auto px-6 py-20">
            <A href="/" attr:class="inline-flex items-center gap-2 text-sm text-gray-400 hover:text-amber-400 mb-10">
                <Icon name=icons::CHEVRON_LEFT class="w-4 h-4"/>
                "Back to home"
            </A>

            <h1 class="text-4xl font-bold text-white mb-2">"Privacy Policy"</h1>
            <p class="text-sm text-gray-500 mb-12">"Last updated: "{LAST_UPDATED}</p>

            <div class="space-y-10">
                {SECTIONS.iter().map(|section| view! {
                    <section>
                        <h2 class="text-xl font-semibold text-white mb-3">{section.heading}</h2>
                        {section.body.iter().map(|p| view! {
                            <p class="text-gray-300 leading-relaxed mb-3">{*p}</p>
                        }).collect_view()}
                    </section>
                }).collect_view()}
            </div>

            <p class="mt-12 text-xs text-gray-500">
                {format!("Consent preferences are kept in local storage under \"{CONSENT_STORAGE_KEY}\".")}
            </p>
            <p class="mt-4 text-sm text-gray-500">{COPYRIGHT}</p>
        </main>
    }
}
