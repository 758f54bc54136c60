//! # Feature: Announcements
//!
//! Default birthday announcement templates. The help content reads these once
//! when it is built; the scheduler that actually posts announcements lives
//! elsewhere.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use crate::core::MessageTemplate;

pub const DEFAULT_ANNOUNCE: &str = "Please wish a happy birthday to %n!";
pub const DEFAULT_ANNOUNCE_PL: &str = "Please wish a happy birthday to our esteemed members: %n";

/// Source of the default singular/plural announcement templates
pub trait AnnouncementFormatter: Send + Sync {
    /// Template used when one user has a birthday
    fn default_singular(&self) -> MessageTemplate;

    /// Template used when two or more users have birthdays
    fn default_plural(&self) -> MessageTemplate;
}

/// Built-in announcement defaults
#[derive(Debug, Clone)]
pub struct DefaultAnnouncements {
    singular: MessageTemplate,
    plural: MessageTemplate,
}

impl DefaultAnnouncements {
    pub fn new(singular: MessageTemplate, plural: MessageTemplate) -> Self {
        Self { singular, plural }
    }
}

impl Default for DefaultAnnouncements {
    fn default() -> Self {
        Self::new(
            MessageTemplate::parse(DEFAULT_ANNOUNCE),
            MessageTemplate::parse(DEFAULT_ANNOUNCE_PL),
        )
    }
}

impl AnnouncementFormatter for DefaultAnnouncements {
    fn default_singular(&self) -> MessageTemplate {
        self.singular.clone()
    }

    fn default_plural(&self) -> MessageTemplate {
        self.plural.clone()
    }
}
