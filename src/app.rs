use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::ui::{CookieConsent, LandingPage, NotFoundPage, PrivacyPage};

/// Canonical URL of the page being rendered, when `SITE_URL` is configured
#[cfg(feature = "ssr")]
fn canonical_url() -> Option<String> {
    use crate::core::config::Config;

    let config = use_context::<Config>()?;
    let parts = use_context::<axum::http::request::Parts>()?;
    config.canonical_url(parts.uri.path())
}

#[cfg(not(feature = "ssr"))]
fn canonical_url() -> Option<String> {
    None
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let canonical = canonical_url();

    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {canonical.map(|href| view! { <link rel="canonical" href=href/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/leadq.css"/>

        <Title text="LeadQ.AI"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("privacy-policy") view=PrivacyPage/>
            </Routes>
        </Router>

        <CookieConsent/>
    }
}
