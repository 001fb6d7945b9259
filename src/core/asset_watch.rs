//! Load watchdog for optional decorative assets
//!
//! An animated asset that fails to load, or takes longer than
//! [`ASSET_TIMEOUT_MS`], is swapped for a static fallback. No error is shown
//! to the visitor.

use super::state::StateCell;
use super::timer::{millis, Timer};

pub const ASSET_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetState {
    #[default]
    Loading,
    Loaded,
    /// Terminal: the fallback stays once shown
    Fallback,
}

impl AssetState {
    pub fn on_load(self) -> Self {
        match self {
            AssetState::Loading => AssetState::Loaded,
            other => other,
        }
    }

    pub fn on_error(self) -> Self {
        AssetState::Fallback
    }

    pub fn on_timeout(self) -> Self {
        match self {
            AssetState::Loading => AssetState::Fallback,
            other => other,
        }
    }

    pub fn shows_fallback(&self) -> bool {
        matches!(self, AssetState::Fallback)
    }
}

#[derive(Clone, Copy)]
pub struct AssetWatch<C, T> {
    state: C,
    timer: T,
}

impl<C, T> AssetWatch<C, T>
where
    C: StateCell<AssetState>,
    T: Timer,
{
    pub fn new(state: C, timer: T) -> Self {
        Self { state, timer }
    }

    /// Start the load timeout
    pub fn arm(&self) {
        let state = self.state.clone();
        self.timer.schedule(
            millis(ASSET_TIMEOUT_MS),
            Box::new(move || {
                state.mutate(|s| *s = s.on_timeout());
            }),
        );
    }

    pub fn loaded(&self) {
        self.state.mutate(|s| *s = s.on_load());
    }

    pub fn failed(&self) {
        self.state.mutate(|s| *s = s.on_error());
    }

    pub fn current(&self) -> AssetState {
        self.state.peek(|s| *s).unwrap_or_default()
    }
}
