//! Meeting intelligence demo
//!
//! Follows one booked meeting from the calendar webhook through live
//! transcription to the post-meeting summary on the dashboard.

use super::{Attachment, AttachmentKind};
use crate::core::sequencer::{DemoScript, DemoStage, RevealTrack, SequencerError, StageMachine, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStage {
    Idle,
    BookingWebhook,
    BookingOffline,
    ContextLinking,
    LiveTranscription,
    ProofUpload,
    AiSummary,
    Dashboard,
}

impl DemoStage for MeetingStage {
    fn key(&self) -> &'static str {
        match self {
            MeetingStage::Idle => "idle",
            MeetingStage::BookingWebhook => "booking-webhook",
            MeetingStage::BookingOffline => "booking-offline",
            MeetingStage::ContextLinking => "context-linking",
            MeetingStage::LiveTranscription => "live-transcription",
            MeetingStage::ProofUpload => "proof-upload",
            MeetingStage::AiSummary => "ai-summary",
            MeetingStage::Dashboard => "dashboard",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MeetingStage::Idle => "Ready",
            MeetingStage::BookingWebhook => "Online Booking",
            MeetingStage::BookingOffline => "Offline Booking",
            MeetingStage::ContextLinking => "Context",
            MeetingStage::LiveTranscription => "Transcribe",
            MeetingStage::ProofUpload => "Proof",
            MeetingStage::AiSummary => "Summary",
            MeetingStage::Dashboard => "Dashboard",
        }
    }
}

pub const STAGES: &[MeetingStage] = &[
    MeetingStage::Idle,
    MeetingStage::BookingWebhook,
    MeetingStage::BookingOffline,
    MeetingStage::ContextLinking,
    MeetingStage::LiveTranscription,
    MeetingStage::ProofUpload,
    MeetingStage::AiSummary,
    MeetingStage::Dashboard,
];

pub struct Booking {
    pub channel: &'static str,
    pub contact: &'static str,
    pub company: &'static str,
    pub slot: &'static str,
    pub detail: &'static str,
}

pub const ONLINE_BOOKING: Booking = Booking {
    channel: "Calendar webhook",
    contact: "Jordan Lee",
    company: "Northwind Logistics",
    slot: "Thu, Jan 29 · 10:00 AM",
    detail: "Booked through the pricing page scheduler",
};

pub const OFFLINE_BOOKING: Booking = Booking {
    channel: "NFC card tap",
    contact: "Jordan Lee",
    company: "Northwind Logistics",
    slot: "Thu, Jan 29 · 10:00 AM",
    detail: "Confirmed in person at the Logistics Expo booth",
};

pub struct ContextLink {
    pub key: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const CONTEXT_LINKS: &[ContextLink] = &[
    ContextLink {
        key: "crm",
        label: "CRM record",
        detail: "Deal stage: Discovery · $48k ARR",
    },
    ContextLink {
        key: "research",
        label: "Profile research",
        detail: "Head of Operations · 8 years in freight",
    },
    ContextLink {
        key: "email-thread",
        label: "Email thread",
        detail: "3 messages · last reply 2 days ago",
    },
];

pub const LINK_KEYS: &[&str] = &["crm", "research", "email-thread"];

pub const LINK_TRACK: RevealTrack<MeetingStage> = RevealTrack::new(LINK_KEYS, MeetingStage::ContextLinking);

pub struct TranscriptLine {
    pub key: &'static str,
    pub speaker: &'static str,
    pub text: &'static str,
}

pub const TRANSCRIPT: &[TranscriptLine] = &[
    TranscriptLine {
        key: "line-1",
        speaker: "Alex (LeadQ)",
        text: "Thanks for stopping by the booth last week. How is the new warehouse rollout going?",
    },
    TranscriptLine {
        key: "line-2",
        speaker: "Jordan Lee",
        text: "Busy. Our reps are still logging every visit by hand, so follow-ups slip.",
    },
    TranscriptLine {
        key: "line-3",
        speaker: "Alex (LeadQ)",
        text: "That is exactly where the agents help. Every meeting lands in the CRM with notes attached.",
    },
    TranscriptLine {
        key: "line-4",
        speaker: "Jordan Lee",
        text: "We would need it for about forty reps, and it has to work offline on site.",
    },
    TranscriptLine {
        key: "line-5",
        speaker: "Alex (LeadQ)",
        text: "The NFC cards sync once the phone is back online. I can send a pilot proposal today.",
    },
    TranscriptLine {
        key: "line-6",
        speaker: "Jordan Lee",
        text: "Please do. Loop in our CFO, she signs off on anything above thirty seats.",
    },
];

pub const TRANSCRIPT_KEYS: &[&str] = &["line-1", "line-2", "line-3", "line-4", "line-5", "line-6"];

pub const TRANSCRIPT_TRACK: RevealTrack<MeetingStage> =
    RevealTrack::new(TRANSCRIPT_KEYS, MeetingStage::LiveTranscription);

/// Photo of the whiteboard, uploaded as proof of the meeting
pub const PROOF: Attachment = Attachment {
    name: "whiteboard-northwind.jpg",
    kind: AttachmentKind::Image,
    size: "1.8 MB",
};

pub struct SummaryBullet {
    pub key: &'static str,
    pub text: &'static str,
}

pub const SUMMARY: &[SummaryBullet] = &[
    SummaryBullet {
        key: "pain",
        text: "Manual visit logging causes missed follow-ups",
    },
    SummaryBullet {
        key: "scope",
        text: "Pilot for ~40 field reps, offline capture required",
    },
    SummaryBullet {
        key: "stakeholder",
        text: "CFO approval needed above 30 seats",
    },
    SummaryBullet {
        key: "next-step",
        text: "Send pilot proposal today, CC the CFO",
    },
];

pub const SUMMARY_KEYS: &[&str] = &["pain", "scope", "stakeholder", "next-step"];

pub const SUMMARY_TRACK: RevealTrack<MeetingStage> = RevealTrack::new(SUMMARY_KEYS, MeetingStage::AiSummary);

pub struct DashboardUpdate {
    pub label: &'static str,
    pub value: &'static str,
}

pub const DASHBOARD_UPDATES: &[DashboardUpdate] = &[
    DashboardUpdate {
        label: "Deal stage",
        value: "Discovery → Proposal",
    },
    DashboardUpdate {
        label: "Follow-up task",
        value: "Pilot proposal due today",
    },
    DashboardUpdate {
        label: "Proof of visit",
        value: "Attached",
    },
];

pub fn script() -> Result<DemoScript<MeetingStage>, SequencerError> {
    let timeline = Timeline::new()
        .stage(300, MeetingStage::BookingWebhook)
        .stage(1_800, MeetingStage::BookingOffline)
        .stage(3_300, MeetingStage::ContextLinking)
        .reveal_each(3_300, 500, LINK_TRACK.keys())
        .stage(5_500, MeetingStage::LiveTranscription)
        .reveal_each(5_100, 900, TRANSCRIPT_TRACK.keys())
        .stage(11_200, MeetingStage::ProofUpload)
        .progress_steps(11_200, 120, 10, 10)
        .stage(13_000, MeetingStage::AiSummary)
        .reveal_each(12_900, 600, SUMMARY_TRACK.keys())
        .stage(16_200, MeetingStage::Dashboard);

    DemoScript::new(StageMachine::new(STAGES)?, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequencer::Cue;

    #[test]
    fn test_script_is_valid() {
        let script = script().unwrap();
        assert_eq!(script.timeline().duration_ms(), 16_200);
    }

    #[test]
    fn test_track_keys_line_up_with_content() {
        let links: Vec<_> = CONTEXT_LINKS.iter().map(|l| l.key).collect();
        let lines: Vec<_> = TRANSCRIPT.iter().map(|l| l.key).collect();
        let bullets: Vec<_> = SUMMARY.iter().map(|b| b.key).collect();

        assert_eq!(links, LINK_KEYS);
        assert_eq!(lines, TRANSCRIPT_KEYS);
        assert_eq!(bullets, SUMMARY_KEYS);
    }

    #[test]
    fn test_transcript_lines_every_900ms_from_6000() {
        let script = script().unwrap();
        let offsets: Vec<_> = script
            .timeline()
            .entries()
            .iter()
            .filter(|e| matches!(e.cue, Cue::Reveal(k) if TRANSCRIPT_KEYS.contains(&k)))
            .map(|e| e.at_ms)
            .collect();

        assert_eq!(offsets, vec![6_000, 6_900, 7_800, 8_700, 9_600, 10_500]);
    }

    #[test]
    fn test_upload_completes_before_summary() {
        let script = script().unwrap();
        let last_progress = script
            .timeline()
            .entries()
            .iter()
            .rev()
            .find(|e| matches!(e.cue, Cue::Progress(_)))
            .unwrap();

        assert_eq!(last_progress.cue, Cue::Progress(100));
        assert!(last_progress.at_ms < 13_000);
    }

    #[test]
    fn test_every_stage_gets_an_indicator_pill() {
        let machine = StageMachine::new(STAGES).unwrap();
        assert_eq!(machine.indicator(MeetingStage::Idle).len(), STAGES.len() - 1);
    }
}
