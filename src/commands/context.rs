//! Shared context for command modules
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Prefix, announcement defaults and bot status replace AI/database services
//! - 1.0.0: Initial implementation with core shared state

use std::sync::Arc;

use crate::features::{get_bot_version, AnnouncementFormatter, BotStatus};

/// Shared read-only facilities for all command modules
///
/// Contains:
/// - The command prefix
/// - The running version identifier
/// - AnnouncementFormatter for default message templates
/// - BotStatus for live statistics
#[derive(Clone)]
pub struct CommandContext {
    pub prefix: String,
    pub version: String,
    pub announcements: Arc<dyn AnnouncementFormatter>,
    pub status: Arc<dyn BotStatus>,
}

impl CommandContext {
    /// Create a new CommandContext reporting the build version
    pub fn new(
        prefix: impl Into<String>,
        announcements: Arc<dyn AnnouncementFormatter>,
        status: Arc<dyn BotStatus>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            version: get_bot_version().to_string(),
            announcements,
            status,
        }
    }

    /// Override the reported version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
