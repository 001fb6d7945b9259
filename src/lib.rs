//! LeadQ.AI - marketing site
//!
//! A server-rendered, hydrated Leptos site presenting the LeadQ.AI product:
//! scripted demos of the AI agents, pricing, FAQ and a contact form.
//!
//! - `core`: DOM-free logic (demo sequencer, form validation, consent, content)
//! - `ui`: Leptos components
//! - `app`: document shell and router

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
