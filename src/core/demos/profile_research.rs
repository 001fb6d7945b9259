//! Lead profile research and enrichment demo

use crate::core::sequencer::{DemoScript, DemoStage, RevealTrack, SequencerError, StageMachine, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchStage {
    Idle,
    Input,
    Researching,
    Disambiguating,
    Enriching,
    Complete,
}

impl DemoStage for ResearchStage {
    fn key(&self) -> &'static str {
        match self {
            ResearchStage::Idle => "idle",
            ResearchStage::Input => "input",
            ResearchStage::Researching => "researching",
            ResearchStage::Disambiguating => "disambiguating",
            ResearchStage::Enriching => "enriching",
            ResearchStage::Complete => "complete",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ResearchStage::Idle => "Ready",
            ResearchStage::Input => "Input",
            ResearchStage::Researching => "Research",
            ResearchStage::Disambiguating => "Disambiguate",
            ResearchStage::Enriching => "Enrich",
            ResearchStage::Complete => "Complete",
        }
    }
}

impl ResearchStage {
    /// Status line under the agent header
    pub fn status_text(&self) -> &'static str {
        match self {
            ResearchStage::Idle | ResearchStage::Input => "Ready to research",
            ResearchStage::Researching => "Analyzing web signals...",
            ResearchStage::Disambiguating => "Disambiguating identity...",
            ResearchStage::Enriching => "Enriching profile...",
            ResearchStage::Complete => "Profile verified",
        }
    }
}

pub const STAGES: &[ResearchStage] = &[
    ResearchStage::Idle,
    ResearchStage::Input,
    ResearchStage::Researching,
    ResearchStage::Disambiguating,
    ResearchStage::Enriching,
    ResearchStage::Complete,
];

pub struct InputProfile {
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
}

pub const INPUT_PROFILE: InputProfile = InputProfile {
    name: "Sarah Chen",
    company: "TechFlow Inc",
    role: "VP of Sales",
};

pub struct Candidate {
    pub key: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub confidence: u8,
    pub is_match: bool,
}

pub const CANDIDATES: &[Candidate] = &[
    Candidate {
        key: "candidate-1",
        name: "Sarah Chen",
        role: "Software Engineer",
        company: "Google",
        confidence: 23,
        is_match: false,
    },
    Candidate {
        key: "candidate-2",
        name: "Sarah Chen",
        role: "VP of Sales",
        company: "TechFlow Inc",
        confidence: 94,
        is_match: true,
    },
    Candidate {
        key: "candidate-3",
        name: "Sarah Chen",
        role: "Marketing Manager",
        company: "Salesforce",
        confidence: 31,
        is_match: false,
    },
];

pub const SELECTED_CANDIDATE_KEY: &str = "candidate-2";

pub struct WebSource {
    pub key: &'static str,
    pub name: &'static str,
}

pub const SOURCES: &[WebSource] = &[
    WebSource {
        key: "linkedin",
        name: "LinkedIn",
    },
    WebSource {
        key: "company",
        name: "Company DB",
    },
    WebSource {
        key: "web",
        name: "Web Signals",
    },
];

pub const SOURCE_KEYS: &[&str] = &["linkedin", "company", "web"];

pub const SOURCE_TRACK: RevealTrack<ResearchStage> = RevealTrack::new(SOURCE_KEYS, ResearchStage::Researching);

pub struct EnrichedField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Enriched profile, one field per reveal
pub const ENRICHED_FIELDS: &[EnrichedField] = &[
    EnrichedField {
        key: "identity",
        label: "Verified Identity",
        value: "Sarah Chen",
    },
    EnrichedField {
        key: "role",
        label: "Role",
        value: "VP of Sales @ TechFlow Inc",
    },
    EnrichedField {
        key: "email",
        label: "Email",
        value: "sarah.chen@techflow.io",
    },
    EnrichedField {
        key: "location",
        label: "Location",
        value: "San Francisco, CA",
    },
    EnrichedField {
        key: "linkedin-profile",
        label: "LinkedIn",
        value: "linkedin.com/in/sarahchen-sales",
    },
    EnrichedField {
        key: "experience",
        label: "Experience",
        value: "12+ years in B2B SaaS",
    },
    EnrichedField {
        key: "summary",
        label: "AI Summary",
        value: "Experienced sales leader with a track record of scaling revenue teams from seed to Series C. Expert in enterprise sales, team building, and go-to-market strategy.",
    },
];

// Reveal keys share one run, so the LinkedIn field needs a key distinct from
// the LinkedIn source.
pub const FIELD_KEYS: &[&str] = &[
    "identity",
    "role",
    "email",
    "location",
    "linkedin-profile",
    "experience",
    "summary",
];

pub const FIELD_TRACK: RevealTrack<ResearchStage> = RevealTrack::new(FIELD_KEYS, ResearchStage::Enriching);

pub fn script() -> Result<DemoScript<ResearchStage>, SequencerError> {
    let timeline = Timeline::new()
        .stage(500, ResearchStage::Input)
        .stage(1_500, ResearchStage::Researching)
        .reveal_each(1_500, 500, SOURCE_TRACK.keys())
        .stage(4_000, ResearchStage::Disambiguating)
        .reveal(5_500, SELECTED_CANDIDATE_KEY)
        .stage(6_500, ResearchStage::Enriching)
        .reveal_each(6_600, 400, FIELD_TRACK.keys())
        .stage(10_000, ResearchStage::Complete);

    DemoScript::new(StageMachine::new(STAGES)?, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_valid() {
        let script = script().unwrap();
        assert_eq!(script.timeline().duration_ms(), 10_000);
        assert_eq!(script.timeline().reveal_count(), 3 + 1 + 7);
    }

    #[test]
    fn test_track_keys_line_up_with_content() {
        let sources: Vec<_> = SOURCES.iter().map(|s| s.key).collect();
        assert_eq!(sources, SOURCE_KEYS);
        let fields: Vec<_> = ENRICHED_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(fields, FIELD_KEYS);
    }

    #[test]
    fn test_reveal_keys_are_unique_across_tracks() {
        let script = script().unwrap();
        let mut keys: Vec<_> = script
            .timeline()
            .entries()
            .iter()
            .filter_map(|e| match e.cue {
                crate::core::sequencer::Cue::Reveal(k) => Some(k),
                _ => None,
            })
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_selected_candidate_is_the_confident_match() {
        let best = CANDIDATES.iter().max_by_key(|c| c.confidence).unwrap();

        assert_eq!(best.key, SELECTED_CANDIDATE_KEY);
        assert!(best.is_match);
        assert_eq!(best.role, INPUT_PROFILE.role);
    }
}
