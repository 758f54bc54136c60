//! Guild text channel reply target
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId};
use std::sync::Arc;

use crate::commands::ReplyChannel;
use crate::core::{document_embed, Document};

/// Replies by posting an embed into a Discord channel
pub struct GuildTextChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
    guild_id: Option<GuildId>,
}

impl GuildTextChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId, guild_id: Option<GuildId>) -> Self {
        Self {
            http,
            channel_id,
            guild_id,
        }
    }
}

#[async_trait]
impl ReplyChannel for GuildTextChannel {
    fn guild_id(&self) -> Option<u64> {
        self.guild_id.map(|id| id.0)
    }

    async fn send_document(&self, document: &Document) -> Result<()> {
        let embed = document_embed(document);
        self.channel_id
            .send_message(&self.http, |m| m.set_embed(embed))
            .await?;
        Ok(())
    }
}
