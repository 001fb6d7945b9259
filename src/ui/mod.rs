//! Leptos components for the site

pub mod common;
pub mod contact_form;
pub mod cookie_consent;
pub mod demos;
pub mod icon;
pub mod lead_capture;
pub mod navbar;
pub mod pages;
pub mod scroll_to_top;
pub mod sequencer;

pub use cookie_consent::CookieConsent;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage, PrivacyPage};
