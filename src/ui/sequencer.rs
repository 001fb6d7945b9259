//! Reactive bindings for the demo sequencer
//!
//! A demo component owns one [`DemoController`]: the run lives in an
//! `RwSignal` so the view re-renders on every cue, and cues are scheduled on
//! the page's timers through [`BrowserTimer`].

use std::time::Duration;

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::core::sequencer::{
    DemoRun, DemoScript, DemoStage, IndicatorStep, SequencerError, StageMachine, TimelineScheduler,
};
use crate::core::timer::{Task, Timer};

/// One-shot timers on the browser event loop. Scheduling is a no-op during
/// server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::callback::Timeout;

            let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(ms, task).forget();
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (delay, task);
        }
    }
}

type PageScheduler<S> = TimelineScheduler<S, RwSignal<DemoRun<S>>, BrowserTimer>;

/// Handle shared by a demo's sub-components
pub struct DemoController<S: DemoStage> {
    name: &'static str,
    pub run: RwSignal<DemoRun<S>>,
    machine: StageMachine<S>,
    scheduler: StoredValue<PageScheduler<S>, LocalStorage>,
}

impl<S: DemoStage> Clone for DemoController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: DemoStage> Copy for DemoController<S> {}

impl<S: DemoStage> DemoController<S> {
    fn new(name: &'static str, script: DemoScript<S>) -> Self {
        let machine = script.machine();
        let run = RwSignal::new(PageScheduler::initial_run(&script));
        let scheduler = StoredValue::new_local(TimelineScheduler::new(script, run, BrowserTimer));
        Self {
            name,
            run,
            machine,
            scheduler,
        }
    }

    pub fn machine(&self) -> StageMachine<S> {
        self.machine
    }

    /// Start from idle, or restart from the beginning once a run has begun
    pub fn play(&self) {
        let restarted = self.scheduler.try_with_value(|s| {
            let untouched = s.state().with_untracked(|run| {
                run.stage() == self.machine.first() && !run.is_running()
            });
            if untouched { s.start() } else { s.replay() }
        });
        if restarted == Some(true) {
            log!("{} demo started", self.name);
        }
    }

    pub fn reset(&self) {
        self.scheduler.try_with_value(|s| s.reset());
    }

    pub fn stage(&self) -> Signal<S> {
        let run = self.run;
        Signal::derive(move || run.with(|r| r.stage()))
    }

    pub fn is_running(&self) -> Signal<bool> {
        let run = self.run;
        Signal::derive(move || run.with(|r| r.is_running()))
    }

    /// A run has begun since the last reset
    pub fn has_started(&self) -> Signal<bool> {
        let run = self.run;
        let first = self.machine.first();
        Signal::derive(move || run.with(|r| r.is_running() || r.stage() != first))
    }

    pub fn progress(&self) -> Signal<u8> {
        let run = self.run;
        Signal::derive(move || run.with(|r| r.progress()))
    }

    pub fn is_revealed(&self, key: &'static str) -> Signal<bool> {
        let run = self.run;
        Signal::derive(move || run.with(|r| r.is_revealed(key)))
    }

    /// Current stage is `stage` or later
    pub fn reached(&self, stage: S) -> Signal<bool> {
        let run = self.run;
        let machine = self.machine;
        Signal::derive(move || run.with(|r| machine.is_at_or_after(r.stage(), stage)))
    }

    pub fn indicator(&self) -> Signal<Vec<IndicatorStep>> {
        let run = self.run;
        let machine = self.machine;
        Signal::derive(move || run.with(|r| machine.indicator(r.stage())))
    }
}

/// Bind a demo script to the current component.
///
/// Returns `None` when the script is misconfigured; the caller then renders
/// its static layout. Pending cues are cancelled when the component unmounts.
pub fn use_demo<S: DemoStage>(
    name: &'static str,
    script: Result<DemoScript<S>, SequencerError>,
) -> Option<DemoController<S>> {
    let script = match script {
        Ok(script) => script,
        Err(e) => {
            error!("{name} demo disabled: {e}");
            return None;
        }
    };

    let controller = DemoController::new(name, script);
    let scheduler = controller.scheduler;
    on_cleanup(move || {
        scheduler.try_with_value(|s| s.cancel());
    });
    Some(controller)
}
