//! Scripted demo sequencer
//!
//! Each landing-page demo is an ordered set of stages plus a timeline of cues
//! fired at fixed offsets from a single "play" instant. This module provides
//! the pieces shared by every demo:
//!
//! - [`StageMachine`]: ordered stage lookup (index, before/after queries)
//! - [`Timeline`] and [`DemoScript`]: the declarative, validated list of cues
//! - [`DemoRun`]: the mutable state of one playthrough
//! - [`TimelineScheduler`]: start/cancel/reset with run tokens so that stale
//!   callbacks from a previous run never touch a newer one
//! - [`RevealTrack`]: ordered content reveal (transcript lines, bullets, fields)

mod error;
mod reveal;
mod run;
mod scheduler;
mod stage;
mod timeline;

pub use error::SequencerError;
pub use reveal::RevealTrack;
pub use run::{DemoRun, RunToken};
pub use scheduler::TimelineScheduler;
pub use stage::{DemoStage, IndicatorStep, StageMachine, StepStatus};
pub use timeline::{Cue, DemoScript, Timeline, TimelineEntry};
