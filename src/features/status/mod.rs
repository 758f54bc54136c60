//! # Feature: Bot Status
//!
//! Live statistics about the running bot, read by the info command. Every
//! accessor may come back empty (cache not yet populated, shard unknown); the
//! caller renders that as "unavailable".
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use std::time::Duration;

/// Accessors for live bot-instance statistics
pub trait BotStatus: Send + Sync {
    /// Number of servers currently connected
    fn guild_count(&self) -> Option<usize>;

    /// Shard servicing the given server
    fn shard_for(&self, guild_id: u64) -> Option<u64>;

    /// Avatar of the bot's own user
    fn avatar_url(&self) -> Option<String>;

    /// Time since the process started
    fn uptime(&self) -> Option<Duration>;
}

/// Format an uptime as `Xd Xh Xm Xs`, dropping leading zero units
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
