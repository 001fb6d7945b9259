//! Fixed site header with scroll-spy navigation

use leptos::prelude::*;

use crate::core::navigation::{ActiveSectionTracker, NAV_ITEMS, NavItem};
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Smooth-scroll to a section by id
pub fn scroll_to_section(section_id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id));
        if let Some(element) = target {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = section_id;
    }
}

#[cfg(not(feature = "ssr"))]
type SectionCallback = leptos::wasm_bindgen::closure::Closure<dyn Fn(js_sys::Array)>;

#[cfg(not(feature = "ssr"))]
struct SectionObserver(web_sys::IntersectionObserver);

#[cfg(not(feature = "ssr"))]
impl crate::core::navigation::Disconnect for SectionObserver {
    fn disconnect(&self) {
        self.0.disconnect();
    }
}

#[cfg(not(feature = "ssr"))]
type SectionSubscription = crate::core::navigation::Subscription<SectionObserver, SectionCallback>;

/// Feed section visibility into the tracker through an IntersectionObserver
/// whose root is the viewport midline
#[cfg(not(feature = "ssr"))]
fn observe_sections(tracker: RwSignal<ActiveSectionTracker>) -> Option<SectionSubscription> {
    use leptos::logging::warn;
    use leptos::wasm_bindgen::JsCast;

    use crate::core::navigation::{OBSERVER_ROOT_MARGIN, Subscription};

    let document = web_sys::window().and_then(|w| w.document())?;

    let callback = SectionCallback::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
            let section_id = entry.target().id();
            let _ = tracker.try_update(|t| t.on_intersection(&section_id, entry.is_intersecting()));
        }
    });

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(OBSERVER_ROOT_MARGIN);
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for item in NAV_ITEMS {
                if let Some(section) = document.get_element_by_id(item.section_id) {
                    observer.observe(&section);
                }
            }
            Some(Subscription::new(SectionObserver(observer), callback))
        }
        Err(err) => {
            warn!("section observer unavailable: {err:?}");
            None
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let tracker = RwSignal::new(ActiveSectionTracker::default());
    let condensed = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        use crate::core::navigation::is_header_condensed;

        // Dropped with the component, which disconnects the observer
        let sections = StoredValue::new_local(None::<SectionSubscription>);
        Effect::new(move |_| sections.set_value(observe_sections(tracker)));

        let handle_scroll = window_event_listener(scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or_default();
            condensed.set(is_header_condensed(y));
        });
        on_cleanup(move || drop(handle_scroll));
    }

    let on_select = move |item: &'static NavItem| {
        tracker.update(|t| {
            t.select(item.name);
        });
        menu_open.set(false);
        scroll_to_section(item.section_id);
    };

    let links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let active = move || tracker.with(|t| t.is_active(item.name));
                view! {
                    <a
                        href=item.href()
                        class=class
                        class:nav-active=active
                        aria-current=move || active().then_some("true")
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_select(item);
                        }
                    >
                        {item.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <a href="#main-content" class="skip-link">"Skip to content"</a>
        <header class="site-header" class:site-header-condensed=move || condensed.get()>
            <nav class="max-w-7xl mx-auto flex items-center justify-between px-6 py-4" aria-label="Main">
                <a href="/" class="flex items-center gap-2 text-xl font-bold text-white">
                    <Icon name=icons::SPARKLES class="w-6 h-6"/>
                    "LeadQ.AI"
                </a>

                <div class="hidden md:flex items-center gap-1 nav-pill">
                    {links("nav-link")}
                </div>

                <div class="flex items-center gap-3">
                    <a
                        href="#contact"
                        class="btn-primary hidden md:inline-flex"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact");
                        }
                    >
                        "Book a Demo"
                    </a>
                    <button
                        class="btn-icon md:hidden"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                        }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-1 px-6 pb-4">
                    {links("nav-link-mobile")}
                </div>
            </Show>
        </header>
    }
}
