//! Follow-up email drafting demo

use super::{Attachment, AttachmentKind};
use crate::core::sequencer::{DemoScript, DemoStage, RevealTrack, SequencerError, StageMachine, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStage {
    Idle,
    Contact,
    Generation,
    Customization,
    Delivery,
    Complete,
}

impl DemoStage for EmailStage {
    fn key(&self) -> &'static str {
        match self {
            EmailStage::Idle => "idle",
            EmailStage::Contact => "contact",
            EmailStage::Generation => "generation",
            EmailStage::Customization => "customization",
            EmailStage::Delivery => "delivery",
            EmailStage::Complete => "complete",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EmailStage::Idle => "Ready",
            EmailStage::Contact => "Contact",
            EmailStage::Generation => "AI Generate",
            EmailStage::Customization => "Customize",
            EmailStage::Delivery => "Send",
            EmailStage::Complete => "Sent",
        }
    }

    fn in_indicator(&self) -> bool {
        !matches!(self, EmailStage::Complete)
    }
}

pub const STAGES: &[EmailStage] = &[
    EmailStage::Idle,
    EmailStage::Contact,
    EmailStage::Generation,
    EmailStage::Customization,
    EmailStage::Delivery,
    EmailStage::Complete,
];

pub struct MockContact {
    pub name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub meeting_date: &'static str,
    pub meeting_type: &'static str,
}

pub const CONTACT: MockContact = MockContact {
    name: "Alex Thompson",
    email: "alex.t@techcorp.io",
    company: "TechCorp Industries",
    meeting_date: "Jan 28, 2026",
    meeting_type: "Product Demo",
};

pub const SUBJECT_KEY: &str = "subject";
pub const ATTACHMENTS_KEY: &str = "attachments";
pub const SUBJECT: &str = "Following Up: Product Demo Discussion";

pub struct EmailSection {
    pub key: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub const SECTIONS: &[EmailSection] = &[
    EmailSection {
        key: "greeting",
        title: "Personalized Greeting",
        content: "Dear Alex,",
    },
    EmailSection {
        key: "about",
        title: "Company Introduction",
        content: "Following our insightful discussion, I wanted to share how our solutions align with your strategic goals...",
    },
    EmailSection {
        key: "summary",
        title: "Meeting Summary",
        content: "Key points from our conversation: Integration requirements, timeline expectations, and success metrics...",
    },
    EmailSection {
        key: "proposal",
        title: "Collaboration Proposal",
        content: "Based on TechCorp's growth trajectory, we propose a phased implementation approach...",
    },
    EmailSection {
        key: "cta",
        title: "Next Steps",
        content: "Let's schedule a follow-up to discuss the detailed proposal. Would Thursday work for you?",
    },
];

pub const SECTION_KEYS: &[&str] = &["greeting", "about", "summary", "proposal", "cta"];

pub const SECTION_TRACK: RevealTrack<EmailStage> = RevealTrack::new(SECTION_KEYS, EmailStage::Generation);

pub const ATTACHMENTS: &[Attachment] = &[
    Attachment {
        name: "Proposal.pdf",
        kind: AttachmentKind::Pdf,
        size: "2.4 MB",
    },
    Attachment {
        name: "Presentation.pptx",
        kind: AttachmentKind::Document,
        size: "5.1 MB",
    },
];

pub fn script() -> Result<DemoScript<EmailStage>, SequencerError> {
    let timeline = Timeline::new()
        .stage(0, EmailStage::Contact)
        .reveal(1_000, SUBJECT_KEY)
        .stage(2_000, EmailStage::Generation)
        .reveal_each(1_800, 700, SECTION_TRACK.keys())
        .stage(6_500, EmailStage::Customization)
        .reveal(6_500, ATTACHMENTS_KEY)
        .stage(9_500, EmailStage::Delivery)
        .progress_steps(9_500, 150, 10, 10)
        .stage(11_500, EmailStage::Complete);

    DemoScript::new(StageMachine::new(STAGES)?, timeline)
}
