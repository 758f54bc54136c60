//! # Features
//!
//! Collaborators the command layer reads from: announcement defaults and live
//! bot status.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod announcements;
pub mod status;

pub use announcements::{AnnouncementFormatter, DefaultAnnouncements};
pub use status::{format_uptime, BotStatus};

/// Version injected at build time
pub const BOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the running bot version
pub fn get_bot_version() -> &'static str {
    BOT_VERSION
}
