/// Configuration defects in a demo script.
///
/// These are caught once when the script is built; a demo that fails
/// validation is rendered without its animation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequencerError {
    #[error("a demo needs at least one stage")]
    NoStages,

    #[error("stage '{stage}' is listed more than once")]
    DuplicateStage { stage: &'static str },

    #[error("stage '{stage}' is not part of this demo")]
    UnknownStage { stage: &'static str },

    #[error("cue at {at_ms}ms is scheduled before the preceding cue at {previous_ms}ms")]
    OutOfOrder { at_ms: u32, previous_ms: u32 },

    #[error("progress {value}% is outside 0..=100")]
    ProgressOutOfRange { value: u8 },

    #[error("cue at {at_ms}ms fires after the final stage")]
    CueAfterFinalStage { at_ms: u32 },

    #[error("the timeline never reaches the final stage '{stage}'")]
    FinalStageMissing { stage: &'static str },
}
