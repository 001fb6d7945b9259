use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Floating button that returns to the top of the page
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        use crate::core::navigation::should_show_scroll_to_top;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let y = window.scroll_y().unwrap_or_default();
            let height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            visible.set(should_show_scroll_to_top(y, height));
        });
        on_cleanup(move || drop(handle_scroll));
    }

    let to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    view! {
        <button
            class="scroll-top"
            class:scroll-top-visible=move || visible.get()
            aria-label="Scroll to top"
            tabindex=move || if visible.get() { "0" } else { "-1" }
            on:click=to_top
        >
            <Icon name=icons::ARROW_UP class="w-5 h-5"/>
        </button>
    }
}
