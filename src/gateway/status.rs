//! Live bot statistics from the serenity cache
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Guild count, shard lookup, avatar and uptime

use chrono::{DateTime, Utc};
use log::warn;
use serenity::cache::Cache;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::features::BotStatus;

/// Shard servicing a guild, per Discord's sharding formula
pub fn shard_id(guild_id: u64, shard_count: u64) -> Option<u64> {
    (shard_count > 0).then(|| (guild_id >> 22) % shard_count)
}

/// BotStatus over the gateway cache
///
/// The cache only exists once the client is built, which happens after the
/// command modules are constructed; until [`GatewayStatus::attach`] is called,
/// cache-backed statistics report as unavailable.
pub struct GatewayStatus {
    cache: OnceLock<Arc<Cache>>,
    shard_count: u64,
    started_at: DateTime<Utc>,
}

impl GatewayStatus {
    pub fn new(shard_count: u64) -> Self {
        Self {
            cache: OnceLock::new(),
            shard_count,
            started_at: Utc::now(),
        }
    }

    /// Connect the client's cache
    pub fn attach(&self, cache: Arc<Cache>) {
        if self.cache.set(cache).is_err() {
            warn!("Gateway cache already attached; ignoring");
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl BotStatus for GatewayStatus {
    fn guild_count(&self) -> Option<usize> {
        self.cache.get().map(|cache| cache.guild_count())
    }

    fn shard_for(&self, guild_id: u64) -> Option<u64> {
        shard_id(guild_id, self.shard_count)
    }

    fn avatar_url(&self) -> Option<String> {
        self.cache.get()?.current_user().avatar_url()
    }

    fn uptime(&self) -> Option<Duration> {
        (Utc::now() - self.started_at).to_std().ok()
    }
}
