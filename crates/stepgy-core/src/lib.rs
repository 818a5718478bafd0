//! Stepgy Site Core
//!
//! This crate provides the page content model, the closed icon set, one-shot
//! section entrance tracking, the contact submission state machine and the
//! page composer consumed by the site renderer.

pub mod contact;
pub mod content;
pub mod icon;
pub mod page;
pub mod section;

pub use contact::{
    ContactError, ContactRequest, ContactResponse, ContactTransport, Failure, FailureKind,
    FormField, FormState, HttpContactTransport, Submission, TransportError,
};
pub use content::{ContentError, ContentTree, SectionContent, SectionId};
pub use icon::{Glyph, Icon};
pub use page::{Block, NavItem, Page, SectionBlock};
pub use section::{
    EntranceWatch, SectionFrame, SectionPhase, SectionVisibility, Threshold, Viewport,
    VisibilityMap,
};

/// Project name shown in the navigation header and footer
pub const BRAND: &str = "Stepgy";
