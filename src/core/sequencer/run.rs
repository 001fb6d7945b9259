use super::{Cue, DemoStage};

/// Identifies one playthrough. Deferred cues carry the token they were
/// scheduled with and are dropped when it no longer matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunToken(u64);

impl RunToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Mutable state of a demo: what the view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRun<S> {
    stage: S,
    revealed: Vec<&'static str>,
    progress: u8,
    running: bool,
    token: RunToken,
}

impl<S: DemoStage> DemoRun<S> {
    /// Idle state at `initial`
    pub fn new(initial: S) -> Self {
        Self {
            stage: initial,
            revealed: Vec::new(),
            progress: 0,
            running: false,
            token: RunToken::default(),
        }
    }

    pub fn stage(&self) -> S {
        self.stage
    }

    /// Revealed content keys in reveal order
    pub fn revealed(&self) -> &[&'static str] {
        &self.revealed
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(&key)
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn token(&self) -> RunToken {
        self.token
    }

    /// Reinitialise at `initial`, mark running and issue a fresh token
    pub(crate) fn begin(&mut self, initial: S) -> RunToken {
        self.reinit(initial);
        self.running = true;
        self.token
    }

    /// Stop the run in place, invalidating pending cues
    pub(crate) fn halt(&mut self) {
        self.running = false;
        self.token = self.token.next();
    }

    /// Back to idle at `initial`, invalidating pending cues
    pub(crate) fn reinit(&mut self, initial: S) {
        self.stage = initial;
        self.revealed.clear();
        self.progress = 0;
        self.running = false;
        self.token = self.token.next();
    }

    /// Apply a cue scheduled under `token`. Returns false when the cue is stale.
    pub(crate) fn apply(&mut self, token: RunToken, cue: Cue<S>, final_stage: S) -> bool {
        if token != self.token || !self.running {
            return false;
        }
        match cue {
            Cue::Stage(stage) => {
                self.stage = stage;
                if stage == final_stage {
                    self.running = false;
                }
            }
            Cue::Reveal(key) => {
                if !self.revealed.contains(&key) {
                    self.revealed.push(key);
                }
            }
            Cue::Progress(value) => self.progress = value.min(100),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Idle,
        Working,
        Finished,
    }

    impl DemoStage for Phase {
        fn key(&self) -> &'static str {
            match self {
                Phase::Idle => "idle",
                Phase::Working => "working",
                Phase::Finished => "finished",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }
    }

    #[test]
    fn test_new_run_is_idle() {
        let run = DemoRun::new(Phase::Idle);

        assert_eq!(run.stage(), Phase::Idle);
        assert!(run.revealed().is_empty());
        assert_eq!(run.progress(), 0);
        assert!(!run.is_running());
    }

    #[test]
    fn test_each_begin_issues_a_new_token() {
        let mut run = DemoRun::new(Phase::Idle);

        let first = run.begin(Phase::Idle);
        let second = run.begin(Phase::Idle);

        assert_ne!(first, second);
        assert_eq!(run.token(), second);
    }

    #[test]
    fn test_stale_token_is_rejected() {
        let mut run = DemoRun::new(Phase::Idle);
        let old = run.begin(Phase::Idle);
        run.begin(Phase::Idle);

        assert!(!run.apply(old, Cue::Stage(Phase::Working), Phase::Finished));
        assert_eq!(run.stage(), Phase::Idle);
    }

    #[test]
    fn test_reveal_is_ordered_and_deduplicated() {
        let mut run = DemoRun::new(Phase::Idle);
        let token = run.begin(Phase::Idle);

        run.apply(token, Cue::Reveal("b"), Phase::Finished);
        run.apply(token, Cue::Reveal("a"), Phase::Finished);
        run.apply(token, Cue::Reveal("b"), Phase::Finished);

        assert_eq!(run.revealed(), &["b", "a"]);
        assert!(run.is_revealed("a"));
        assert!(!run.is_revealed("c"));
    }

    #[test]
    fn test_final_stage_stops_the_run() {
        let mut run = DemoRun::new(Phase::Idle);
        let token = run.begin(Phase::Idle);

        run.apply(token, Cue::Progress(60), Phase::Finished);
        run.apply(token, Cue::Stage(Phase::Finished), Phase::Finished);

        assert_eq!(run.stage(), Phase::Finished);
        assert_eq!(run.progress(), 60);
        assert!(!run.is_running());
        assert!(!run.apply(token, Cue::Progress(80), Phase::Finished));
    }

    #[test]
    fn test_halt_keeps_content_but_drops_pending_cues() {
        let mut run = DemoRun::new(Phase::Idle);
        let token = run.begin(Phase::Idle);
        run.apply(token, Cue::Stage(Phase::Working), Phase::Finished);

        run.halt();

        assert_eq!(run.stage(), Phase::Working);
        assert!(!run.is_running());
        assert!(!run.apply(token, Cue::Reveal("x"), Phase::Finished));
    }

    #[test]
    fn test_reinit_clears_content() {
        let mut run = DemoRun::new(Phase::Idle);
        let token = run.begin(Phase::Idle);
        run.apply(token, Cue::Reveal("x"), Phase::Finished);
        run.apply(token, Cue::Progress(30), Phase::Finished);

        run.reinit(Phase::Idle);

        assert_eq!(run, DemoRun { token: run.token(), ..DemoRun::new(Phase::Idle) });
    }
}
