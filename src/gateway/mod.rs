//! # Gateway Adapters
//!
//! Serenity-backed implementations of the command layer's collaborators.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod channel;
pub mod status;

pub use channel::GuildTextChannel;
pub use status::{shard_id, GatewayStatus};
