//! Cookie consent banner and preferences dialog

use chrono::Utc;
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::consent::{
    BANNER_DELAY_MS, ConsentError, ConsentManager, ConsentPreferences, KeyValueStore,
};
use crate::core::timer::{Timer, millis};
use crate::ui::common::{CheckboxField, Modal};
use crate::ui::icon::{Icon, icons};
use crate::ui::sequencer::BrowserTimer;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(not(feature = "ssr"))]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, ConsentError> {
        web_sys::window()
            .ok_or_else(|| ConsentError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| ConsentError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| ConsentError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConsentError> {
        #[cfg(not(feature = "ssr"))]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| ConsentError::Unavailable(format!("{e:?}")))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            Err(ConsentError::Unavailable("server render".into()))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
        #[cfg(not(feature = "ssr"))]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| ConsentError::Unavailable(format!("{e:?}")))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err(ConsentError::Unavailable("server render".into()))
        }
    }
}

fn manager() -> ConsentManager<LocalStore> {
    ConsentManager::new(LocalStore)
}

/// Log the outcome of a save; the banner closes either way
fn record(action: &str, result: Result<ConsentPreferences, ConsentError>) {
    match result {
        Ok(prefs) => log!(
            "cookie consent {action}: analytics={} marketing={}",
            prefs.analytics,
            prefs.marketing
        ),
        Err(err) => warn!("cookie consent {action} not stored: {err}"),
    }
}

#[component]
pub fn CookieConsent() -> impl IntoView {
    let visible = RwSignal::new(false);
    let preferences_open = RwSignal::new(false);
    let analytics = RwSignal::new(false);
    let marketing = RwSignal::new(false);

    // Effects only run in the browser
    Effect::new(move |_| {
        let prompt = match manager().load() {
            Ok(stored) => stored.is_none(),
            Err(err) => {
                warn!("cookie consent unreadable, prompting again: {err}");
                true
            }
        };
        if prompt {
            BrowserTimer.schedule(
                millis(BANNER_DELAY_MS),
                Box::new(move || {
                    let _ = visible.try_set(true);
                }),
            );
        }
    });

    let close_all = move || {
        preferences_open.set(false);
        visible.set(false);
    };

    let accept_all = move |_| {
        record("accepted", manager().accept_all(Utc::now()));
        close_all();
    };
    let decline = move |_| {
        record("declined", manager().decline(Utc::now()));
        close_all();
    };
    let open_preferences = move |_| {
        if let Ok(Some(saved)) = manager().load() {
            analytics.set(saved.analytics);
            marketing.set(saved.marketing);
        }
        preferences_open.set(true);
    };
    let save_preferences = move |_| {
        record(
            "customised",
            manager().save_custom(analytics.get_untracked(), marketing.get_untracked(), Utc::now()),
        );
        close_all();
    };

    view! {
        <div
            class="cookie-banner"
            class:cookie-banner-visible=move || visible.get()
            role="region"
            aria-label="Cookie consent"
            aria-hidden=move || (!visible.get()).to_string()
        >
            <div class="glass rounded-2xl p-6 flex flex-col md:flex-row md:items-center gap-4">
                <Icon name=icons::COOKIE class="w-8 h-8 shrink-0"/>
                <p class="flex-1 text-sm text-gray-300">
                    "We use cookies to run this site and, with your permission, to understand how it is used. "
                    <a href="/privacy-policy" class="underline text-amber-400">"Privacy Policy"</a>
                </p>
                <div class="flex flex-wrap gap-2">
                    <button class="btn-ghost" on:click=open_preferences>"Preferences"</button>
                    <button class="btn-secondary" on:click=decline>"Decline"</button>
                    <button class="btn-primary" on:click=accept_all>"Accept All"</button>
                </div>
            </div>
        </div>

        <Modal
            title="Cookie Preferences"
            subtitle="Choose which optional cookies we may use."
            is_open=preferences_open.into()
            on_close=Callback::new(move |_| preferences_open.set(false))
        >
            <div class="space-y-5">
                <CheckboxField
                    label="Essential"
                    checked=Signal::stored(true)
                    on_change=Callback::new(|_| {})
                    disabled=true
                    description="Required for the site to work. Always on."
                />
                <CheckboxField
                    label="Analytics"
                    checked=analytics.into()
                    on_change=Callback::new(move |on| analytics.set(on))
                    description="Anonymous usage statistics that help us improve the site."
                />
                <CheckboxField
                    label="Marketing"
                    checked=marketing.into()
                    on_change=Callback::new(move |on| marketing.set(on))
                    description="Personalised content and campaign measurement."
                />
                <div class="flex justify-end gap-2 pt-4 border-t border-white/10">
                    <button class="btn-secondary" on:click=move |_| preferences_open.set(false)>"Cancel"</button>
                    <button class="btn-primary" on:click=save_preferences>"Save Preferences"</button>
                </div>
            </div>
        </Modal>
    }
}
