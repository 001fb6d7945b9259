use super::{DemoStage, SequencerError, StageMachine};

/// A single mutation applied to a run when its entry fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue<S> {
    /// Move the run to a stage
    Stage(S),
    /// Append one content item to the revealed list
    Reveal(&'static str),
    /// Set the progress bar to a percentage
    Progress(u8),
}

/// A cue and its offset from the start instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<S> {
    pub at_ms: u32,
    pub cue: Cue<S>,
}

/// Declarative list of cues, built in schedule order.
///
/// ```
/// # use leadq::core::sequencer::{Cue, Timeline};
/// # use leadq::core::demos::email_draft::EmailStage;
/// let timeline = Timeline::new()
///     .stage(0, EmailStage::Contact)
///     .reveal(1_000, "subject")
///     .progress_steps(9_500, 150, 10, 10)
///     .stage(11_500, EmailStage::Complete);
///
/// assert_eq!(timeline.entries()[1].cue, Cue::Reveal("subject"));
/// assert_eq!(timeline.duration_ms(), 11_500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<S> {
    entries: Vec<TimelineEntry<S>>,
}

impl<S: DemoStage> Timeline<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[TimelineEntry<S>] {
        &self.entries
    }

    /// Offset of the last entry
    pub fn duration_ms(&self) -> u32 {
        self.entries.last().map(|e| e.at_ms).unwrap_or(0)
    }

    /// Number of reveal cues in the timeline
    pub fn reveal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.cue, Cue::Reveal(_)))
            .count()
    }

    pub fn push(mut self, at_ms: u32, cue: Cue<S>) -> Self {
        self.entries.push(TimelineEntry { at_ms, cue });
        self
    }

    pub fn stage(self, at_ms: u32, stage: S) -> Self {
        self.push(at_ms, Cue::Stage(stage))
    }

    pub fn reveal(self, at_ms: u32, key: &'static str) -> Self {
        self.push(at_ms, Cue::Reveal(key))
    }

    pub fn progress(self, at_ms: u32, percent: u8) -> Self {
        self.push(at_ms, Cue::Progress(percent))
    }

    /// `count` progress cues, one every `interval_ms` starting one interval
    /// after `start_ms`, each adding `step` percent (capped at 100). Offsets
    /// saturate at `u32::MAX`.
    pub fn progress_steps(mut self, start_ms: u32, interval_ms: u32, step: u8, count: u8) -> Self {
        for i in 1..=count {
            let value = (u16::from(i) * u16::from(step)).min(100) as u8;
            self = self.progress(start_ms.saturating_add(u32::from(i).saturating_mul(interval_ms)), value);
        }
        self
    }
}

impl<S: DemoStage> Default for Timeline<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A stage machine paired with a timeline that has been checked against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoScript<S: 'static> {
    machine: StageMachine<S>,
    timeline: Timeline<S>,
}

impl<S: DemoStage> DemoScript<S> {
    /// Validate `timeline` against `machine`.
    ///
    /// Offsets must be non-decreasing, stage cues must name member stages,
    /// progress must stay within 0..=100, and the final stage must be the last
    /// cue of the timeline.
    pub fn new(machine: StageMachine<S>, timeline: Timeline<S>) -> Result<Self, SequencerError> {
        let final_stage = machine.last();
        let mut previous_ms = 0;
        let mut finished = false;

        for entry in timeline.entries() {
            if entry.at_ms < previous_ms {
                return Err(SequencerError::OutOfOrder {
                    at_ms: entry.at_ms,
                    previous_ms,
                });
            }
            if finished {
                return Err(SequencerError::CueAfterFinalStage { at_ms: entry.at_ms });
            }
            match entry.cue {
                Cue::Stage(stage) if !machine.contains(stage) => {
                    return Err(SequencerError::UnknownStage { stage: stage.key() });
                }
                Cue::Stage(stage) => finished = stage == final_stage,
                Cue::Progress(value) if value > 100 => {
                    return Err(SequencerError::ProgressOutOfRange { value });
                }
                Cue::Progress(_) | Cue::Reveal(_) => {}
            }
            previous_ms = entry.at_ms;
        }

        if !finished {
            return Err(SequencerError::FinalStageMissing {
                stage: final_stage.key(),
            });
        }

        Ok(Self { machine, timeline })
    }

    pub fn machine(&self) -> StageMachine<S> {
        self.machine
    }

    pub fn timeline(&self) -> &Timeline<S> {
        &self.timeline
    }
}
