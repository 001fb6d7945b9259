//! Core site logic with no DOM dependency
//!
//! The demo sequencer, form and consent handling, navigation state and the
//! static marketing content. Everything here runs under plain `cargo test`.

pub mod asset_watch;
#[cfg(feature = "ssr")]
pub mod config;
pub mod consent;
pub mod contact;
pub mod content;
pub mod demos;
pub mod navigation;
pub mod sequencer;
pub mod state;
pub mod timer;
#[cfg(test)]
mod tests;
