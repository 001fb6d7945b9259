//! The three scripted landing-page demos
//!
//! Each module declares its stage enum, its timeline and the canned content
//! the timeline reveals. Nothing here knows about the DOM; the components in
//! `crate::ui::demos` render a [`DemoRun`](crate::core::sequencer::DemoRun)
//! produced by these scripts.

pub mod email_draft;
pub mod meeting;
pub mod profile_research;

/// A file card shown in a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub name: &'static str,
    pub kind: AttachmentKind,
    pub size: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AttachmentKind {
    #[display("pdf")]
    Pdf,
    #[display("doc")]
    Document,
    #[display("image")]
    Image,
}
