use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog over a dimmed backdrop.
///
/// Closes on Escape, on the close button and on a click on the backdrop
/// itself. The content stays mounted while closed.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class="modal-backdrop"
            class:modal-hidden=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                        if element.class_list().contains("modal-backdrop") {
                            on_close.run(());
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div
                class=format!("w-full {} glass rounded-2xl", max_width)
                role="dialog"
                aria-modal="true"
                aria-label=title
            >
                <div class="flex items-start justify-between gap-4 p-6 border-b border-white/10">
                    <div>
                        <h3 class="text-lg font-semibold text-white">{title}</h3>
                        {subtitle.map(|s| view! { <p class="text-sm text-gray-400 mt-1">{s}</p> })}
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
