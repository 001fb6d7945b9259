//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::COPYRIGHT;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - LeadQ.AI" />

        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // 404 icon
                <div class="w-24 h-24 mx-auto mb-6 glass rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-primary">
                        "Go Home"
                    </A>
                    <A href="/#contact" attr:class="btn-secondary">
                        "Contact Us"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
