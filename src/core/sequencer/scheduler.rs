use std::rc::Rc;

use super::{DemoRun, DemoScript, DemoStage};
use crate::core::state::StateCell;
use crate::core::timer::{millis, Timer};

/// Drives one [`DemoRun`] through a [`DemoScript`].
///
/// All cues are scheduled at once when a run starts, each at its offset from
/// the start instant. Every cue captures the run token current at that moment
/// and is dropped on arrival if the token has since changed, so `cancel`,
/// `reset` and teardown never need to reach the platform timers themselves.
pub struct TimelineScheduler<S: 'static, C, T> {
    script: Rc<DemoScript<S>>,
    state: C,
    timer: T,
}

impl<S: 'static, C: Clone, T: Clone> Clone for TimelineScheduler<S, C, T> {
    fn clone(&self) -> Self {
        Self {
            script: self.script.clone(),
            state: self.state.clone(),
            timer: self.timer.clone(),
        }
    }
}

impl<S, C, T> TimelineScheduler<S, C, T>
where
    S: DemoStage,
    C: StateCell<DemoRun<S>>,
    T: Timer,
{
    pub fn new(script: DemoScript<S>, state: C, timer: T) -> Self {
        Self {
            script: Rc::new(script),
            state,
            timer,
        }
    }

    /// A fresh, idle run for `script`, suitable for seeding the state cell
    pub fn initial_run(script: &DemoScript<S>) -> DemoRun<S> {
        DemoRun::new(script.machine().first())
    }

    pub fn script(&self) -> &DemoScript<S> {
        &self.script
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.peek(|run| run.is_running()).unwrap_or(false)
    }

    /// Start a run from the first stage.
    ///
    /// Returns `false` without scheduling anything when a run is already in
    /// progress or the state is gone.
    pub fn start(&self) -> bool {
        let machine = self.script.machine();
        let initial = machine.first();
        let final_stage = machine.last();

        let token = self.state.mutate(|run| {
            if run.is_running() {
                None
            } else {
                Some(run.begin(initial))
            }
        });
        let Some(Some(token)) = token else {
            return false;
        };

        for entry in self.script.timeline().entries() {
            let state = self.state.clone();
            let cue = entry.cue;
            self.timer.schedule(
                millis(entry.at_ms),
                Box::new(move || {
                    state.mutate(|run| run.apply(token, cue, final_stage));
                }),
            );
        }
        true
    }

    /// Stop the run where it is. Pending cues become no-ops.
    pub fn cancel(&self) {
        self.state.mutate(|run| run.halt());
    }

    /// Stop the run and return to the first stage with nothing revealed
    pub fn reset(&self) {
        let initial = self.script.machine().first();
        self.state.mutate(|run| run.reinit(initial));
    }

    /// Reset, then start again from the beginning
    pub fn replay(&self) -> bool {
        self.reset();
        self.start()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::sequencer::{RevealTrack, StageMachine, Timeline};
    use crate::core::timer::ManualTimer;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Upload {
        Idle,
        Picking,
        Sending,
        Sent,
    }

    impl DemoStage for Upload {
        fn key(&self) -> &'static str {
            match self {
                Upload::Idle => "idle",
                Upload::Picking => "picking",
                Upload::Sending => "sending",
                Upload::Sent => "sent",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }
    }

    const STAGES: &[Upload] = &[Upload::Idle, Upload::Picking, Upload::Sending, Upload::Sent];
    const FILES: RevealTrack<Upload> = RevealTrack::new(&["a.pdf", "b.pdf"], Upload::Picking);

    type Scheduler = TimelineScheduler<Upload, Rc<RefCell<DemoRun<Upload>>>, ManualTimer>;

    fn scheduler() -> (Scheduler, Rc<RefCell<DemoRun<Upload>>>, ManualTimer) {
        let machine = StageMachine::new(STAGES).unwrap();
        let timeline = Timeline::new()
            .stage(100, Upload::Picking)
            .reveal_each(100, 100, FILES.keys())
            .stage(400, Upload::Sending)
            .progress_steps(400, 100, 50, 2)
            .stage(700, Upload::Sent);
        let script = DemoScript::new(machine, timeline).unwrap();

        let state = Rc::new(RefCell::new(Scheduler::initial_run(&script)));
        let timer = ManualTimer::new();
        (Scheduler::new(script, state.clone(), timer.clone()), state, timer)
    }

    #[test]
    fn test_start_marks_running_before_any_cue() {
        let (scheduler, state, timer) = scheduler();

        assert!(scheduler.start());

        assert!(state.borrow().is_running());
        assert_eq!(state.borrow().stage(), Upload::Idle);
        assert_eq!(timer.pending(), scheduler.script().timeline().entries().len());
    }

    #[test]
    fn test_cues_fire_at_their_offsets() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();

        timer.advance(100);
        assert_eq!(state.borrow().stage(), Upload::Picking);
        assert!(FILES.is_typing(&state.borrow()));

        timer.advance(200);
        assert_eq!(FILES.visible(&state.borrow()), vec!["a.pdf", "b.pdf"]);
        assert!(!FILES.is_typing(&state.borrow()));

        timer.advance(200);
        assert_eq!(state.borrow().stage(), Upload::Sending);
        assert_eq!(state.borrow().progress(), 50);
    }

    #[test]
    fn test_final_stage_ends_the_run() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();

        timer.run_to_end();

        let run = state.borrow();
        assert_eq!(run.stage(), Upload::Sent);
        assert_eq!(run.progress(), 100);
        assert!(!run.is_running());
    }

    #[test]
    fn test_second_start_while_running_is_ignored() {
        let (scheduler, state, timer) = scheduler();

        assert!(scheduler.start());
        timer.advance(150);
        assert!(!scheduler.start());

        assert_eq!(timer.pending(), 6);
        timer.run_to_end();
        assert_eq!(state.borrow().revealed().len(), FILES.len());
    }

    #[test]
    fn test_start_after_completion_runs_again() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();
        timer.run_to_end();

        assert!(scheduler.start());
        assert_eq!(state.borrow().stage(), Upload::Idle);
        assert!(state.borrow().revealed().is_empty());

        timer.run_to_end();
        assert_eq!(state.borrow().stage(), Upload::Sent);
    }

    #[test]
    fn test_cancel_freezes_state() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();
        timer.advance(250);

        scheduler.cancel();
        let frozen = state.borrow().clone();
        timer.run_to_end();

        assert_eq!(state.borrow().stage(), frozen.stage());
        assert_eq!(state.borrow().revealed(), frozen.revealed());
        assert_eq!(state.borrow().progress(), frozen.progress());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (scheduler, state, _timer) = scheduler();

        scheduler.cancel();
        scheduler.cancel();

        assert_eq!(state.borrow().stage(), Upload::Idle);
        assert!(!state.borrow().is_running());
    }

    #[test]
    fn test_reset_mid_run_restores_initial_state() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();
        timer.advance(500);

        scheduler.reset();
        timer.run_to_end();

        let run = state.borrow();
        assert_eq!(run.stage(), Upload::Idle);
        assert!(run.revealed().is_empty());
        assert_eq!(run.progress(), 0);
        assert!(!run.is_running());
    }

    #[test]
    fn test_replay_discards_stale_cues_from_previous_run() {
        let (scheduler, state, timer) = scheduler();
        scheduler.start();
        timer.advance(150);

        assert!(scheduler.replay());
        // old cues for 200ms onward are still queued but must not apply
        timer.advance(60);
        assert_eq!(state.borrow().stage(), Upload::Idle);
        assert!(state.borrow().revealed().is_empty());

        timer.run_to_end();
        assert_eq!(state.borrow().revealed(), &["a.pdf", "b.pdf"]);
        assert_eq!(state.borrow().stage(), Upload::Sent);
    }
}
