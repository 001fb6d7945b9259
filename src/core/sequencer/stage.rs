use std::fmt::Debug;

use super::SequencerError;

/// A stage of one demo.
///
/// Implemented by a small `Copy` enum per demo; the stage order itself is
/// owned by the [`StageMachine`].
pub trait DemoStage: Copy + Eq + Debug + Send + Sync + 'static {
    /// Stable identifier, used in error messages and `data-stage` attributes
    fn key(&self) -> &'static str;

    /// Human readable label for the stage indicator
    fn label(&self) -> &'static str;

    /// Whether the stage gets a pill in the stage indicator
    fn in_indicator(&self) -> bool {
        true
    }
}

/// Status of one stage relative to the current stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

/// One pill of the stage indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorStep {
    pub key: &'static str,
    pub label: &'static str,
    pub status: StepStatus,
}

/// Ordered, immutable lookup table of a demo's stages.
///
/// The machine does not guard transitions: the scheduler may set any stage at
/// any time. It only answers ordering questions for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageMachine<S: 'static> {
    stages: &'static [S],
}

impl<S: DemoStage> StageMachine<S> {
    /// Build a machine, rejecting an empty or duplicated stage list
    pub fn new(stages: &'static [S]) -> Result<Self, SequencerError> {
        if stages.is_empty() {
            return Err(SequencerError::NoStages);
        }
        for (i, stage) in stages.iter().enumerate() {
            if stages[..i].contains(stage) {
                return Err(SequencerError::DuplicateStage { stage: stage.key() });
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &'static [S] {
        self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The starting (idle) stage
    pub fn first(&self) -> S {
        self.stages[0]
    }

    /// The terminal stage; reaching it ends a run
    pub fn last(&self) -> S {
        self.stages[self.stages.len() - 1]
    }

    pub fn contains(&self, stage: S) -> bool {
        self.stages.contains(&stage)
    }

    /// Position of `stage`, `None` if it does not belong to this demo
    pub fn index_of(&self, stage: S) -> Option<usize> {
        self.stages.iter().position(|s| *s == stage)
    }

    /// `a` comes strictly before `b`. False if either is not a member.
    pub fn is_before(&self, a: S, b: S) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// `a` is `b` or comes after it. False if either is not a member.
    pub fn is_at_or_after(&self, a: S, b: S) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }

    pub fn status_of(&self, stage: S, current: S) -> StepStatus {
        if stage == current {
            StepStatus::Active
        } else if self.is_before(stage, current) {
            StepStatus::Done
        } else {
            StepStatus::Pending
        }
    }

    /// Indicator pills for `current`, skipping the idle stage
    pub fn indicator(&self, current: S) -> Vec<IndicatorStep> {
        self.stages
            .iter()
            .skip(1)
            .filter(|s| s.in_indicator())
            .map(|s| IndicatorStep {
                key: s.key(),
                label: s.label(),
                status: self.status_of(*s, current),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        Warm,
        Bright,
        Done,
    }

    impl DemoStage for Light {
        fn key(&self) -> &'static str {
            match self {
                Light::Off => "off",
                Light::Warm => "warm",
                Light::Bright => "bright",
                Light::Done => "done",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }

        fn in_indicator(&self) -> bool {
            !matches!(self, Light::Done)
        }
    }

    const LIGHTS: &[Light] = &[Light::Off, Light::Warm, Light::Bright, Light::Done];

    #[test]
    fn test_rejects_empty_and_duplicate_lists() {
        const EMPTY: &[Light] = &[];
        const TWICE: &[Light] = &[Light::Off, Light::Warm, Light::Off];

        assert_eq!(StageMachine::new(EMPTY), Err(SequencerError::NoStages));
        assert_eq!(
            StageMachine::new(TWICE),
            Err(SequencerError::DuplicateStage { stage: "off" })
        );
    }

    #[test]
    fn test_index_and_bounds() {
        let machine = StageMachine::new(LIGHTS).unwrap();

        assert_eq!(machine.first(), Light::Off);
        assert_eq!(machine.last(), Light::Done);
        assert_eq!(machine.len(), 4);
        assert_eq!(machine.index_of(Light::Bright), Some(2));
    }

    #[test]
    fn test_index_of_non_member() {
        const PARTIAL: &[Light] = &[Light::Off, Light::Done];
        let machine = StageMachine::new(PARTIAL).unwrap();

        assert_eq!(machine.index_of(Light::Warm), None);
        assert!(!machine.is_before(Light::Warm, Light::Done));
        assert!(!machine.is_at_or_after(Light::Done, Light::Warm));
    }

    #[test]
    fn test_ordering_queries() {
        let machine = StageMachine::new(LIGHTS).unwrap();

        assert!(machine.is_before(Light::Off, Light::Bright));
        assert!(!machine.is_before(Light::Bright, Light::Bright));
        assert!(machine.is_at_or_after(Light::Bright, Light::Bright));
        assert!(machine.is_at_or_after(Light::Done, Light::Warm));
        assert!(!machine.is_at_or_after(Light::Off, Light::Warm));
    }

    #[test]
    fn test_indicator_skips_idle_and_hidden_stages() {
        let machine = StageMachine::new(LIGHTS).unwrap();
        let steps = machine.indicator(Light::Bright);

        let labels: Vec<_> = steps.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["warm", "bright"]);
        assert_eq!(steps[0].status, StepStatus::Done);
        assert_eq!(steps[1].status, StepStatus::Active);

        let finished = machine.indicator(Light::Done);
        assert!(finished.iter().all(|s| s.status == StepStatus::Done));

        let idle = machine.indicator(Light::Off);
        assert!(idle.iter().all(|s| s.status == StepStatus::Pending));
    }
}
