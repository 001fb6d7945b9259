use super::{Cue, DemoRun, DemoStage, Timeline};

/// An ordered list of content items revealed one by one while `owner` is the
/// current stage (transcript lines, summary bullets, enriched fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTrack<S: 'static> {
    keys: &'static [&'static str],
    owner: S,
}

impl<S: DemoStage> RevealTrack<S> {
    pub const fn new(keys: &'static [&'static str], owner: S) -> Self {
        Self { keys, owner }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }

    pub fn owner(&self) -> S {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn revealed_count(&self, run: &DemoRun<S>) -> usize {
        self.keys.iter().filter(|k| run.is_revealed(k)).count()
    }

    /// Revealed keys of this track, in authored order
    pub fn visible(&self, run: &DemoRun<S>) -> Vec<&'static str> {
        self.keys
            .iter()
            .copied()
            .filter(|k| run.is_revealed(k))
            .collect()
    }

    pub fn is_complete(&self, run: &DemoRun<S>) -> bool {
        self.revealed_count(run) == self.len()
    }

    /// The "still typing" indicator: the owning stage is current and items
    /// remain to be revealed
    pub fn is_typing(&self, run: &DemoRun<S>) -> bool {
        run.stage() == self.owner && !self.is_complete(run)
    }
}

impl<S: DemoStage> Timeline<S> {
    /// Reveal `keys` one every `interval_ms`, the first one interval after
    /// `start_ms`. Offsets saturate at `u32::MAX`.
    pub fn reveal_each(mut self, start_ms: u32, interval_ms: u32, keys: &[&'static str]) -> Self {
        for (i, key) in (1u32..).zip(keys) {
            self = self.push(start_ms.saturating_add(i.saturating_mul(interval_ms)), Cue::Reveal(*key));
        }
        self
    }

    /// Reveal each key at its own offset
    pub fn reveal_at(mut self, table: &[(u32, &'static str)]) -> Self {
        for &(at_ms, key) in table {
            self = self.push(at_ms, Cue::Reveal(key));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Scene {
        Intro,
        Talk,
        Outro,
    }

    impl DemoStage for Scene {
        fn key(&self) -> &'static str {
            match self {
                Scene::Intro => "intro",
                Scene::Talk => "talk",
                Scene::Outro => "outro",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }
    }

    const LINES: RevealTrack<Scene> = RevealTrack::new(&["l1", "l2", "l3"], Scene::Talk);

    fn run_with(stage: Scene, revealed: &[&'static str]) -> DemoRun<Scene> {
        let mut run = DemoRun::new(Scene::Intro);
        let token = run.begin(Scene::Intro);
        run.apply(token, Cue::Stage(stage), Scene::Outro);
        for key in revealed {
            run.apply(token, Cue::Reveal(*key), Scene::Outro);
        }
        run
    }

    #[test]
    fn test_reveal_each_spaces_items_after_start() {
        let timeline: Timeline<Scene> = Timeline::new().reveal_each(1_000, 250, LINES.keys());

        let cues: Vec<_> = timeline.entries().iter().map(|e| (e.at_ms, e.cue)).collect();
        assert_eq!(
            cues,
            vec![
                (1_250, Cue::Reveal("l1")),
                (1_500, Cue::Reveal("l2")),
                (1_750, Cue::Reveal("l3")),
            ]
        );
    }

    #[test]
    fn test_reveal_each_saturates_extreme_offsets() {
        let timeline: Timeline<Scene> = Timeline::new().reveal_each(1_000, u32::MAX / 2, LINES.keys());

        let offsets: Vec<_> = timeline.entries().iter().map(|e| e.at_ms).collect();
        assert_eq!(offsets, vec![u32::MAX / 2 + 1_000, u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_reveal_at_uses_explicit_offsets() {
        let timeline: Timeline<Scene> = Timeline::new().reveal_at(&[(10, "a"), (40, "b")]);

        let offsets: Vec<_> = timeline.entries().iter().map(|e| e.at_ms).collect();
        assert_eq!(offsets, vec![10, 40]);
    }

    #[test]
    fn test_typing_while_owner_current_and_incomplete() {
        let run = run_with(Scene::Talk, &["l1"]);

        assert_eq!(LINES.revealed_count(&run), 1);
        assert!(LINES.is_typing(&run));
        assert!(!LINES.is_complete(&run));
    }

    #[test]
    fn test_not_typing_once_complete() {
        let run = run_with(Scene::Talk, &["l1", "l2", "l3"]);

        assert!(LINES.is_complete(&run));
        assert!(!LINES.is_typing(&run));
    }

    #[test]
    fn test_not_typing_outside_owner_stage() {
        let run = run_with(Scene::Intro, &["l1"]);

        assert!(!LINES.is_typing(&run));
    }

    #[test]
    fn test_visible_follows_authored_order_and_ignores_foreign_keys() {
        let run = run_with(Scene::Talk, &["l3", "other", "l1"]);

        assert_eq!(LINES.visible(&run), vec!["l1", "l3"]);
    }
}
