//! Test doubles for command modules

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::Mutex;

use super::context::CommandContext;
use super::handler::{ReplyChannel, Requester};
use crate::core::{Document, MessageTemplate};
use crate::features::{AnnouncementFormatter, BotStatus};

/// Channel that records every delivered document
pub struct RecordingChannel {
    guild_id: Option<u64>,
    fail: bool,
    sent: Mutex<Vec<Document>>,
}

impl RecordingChannel {
    pub fn new(guild_id: Option<u64>) -> Arc<Self> {
        Arc::new(Self {
            guild_id,
            fail: false,
            sent: Mutex::new(Vec::new()),
        })
    }

    /// A channel whose deliveries always fail
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            guild_id: Some(1),
            fail: true,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub async fn sent(&self) -> Vec<Document> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    async fn send_document(&self, document: &Document) -> Result<()> {
        if self.fail {
            bail!("delivery failed");
        }
        self.sent.lock().await.push(document.clone());
        Ok(())
    }
}

/// Status with fixed values; `None` fields report as unavailable
#[derive(Default)]
pub struct FixedStatus {
    pub guild_count: Option<usize>,
    pub shard: Option<u64>,
    pub avatar_url: Option<String>,
    pub uptime: Option<Duration>,
}

impl FixedStatus {
    pub fn available() -> Self {
        Self {
            guild_count: Some(12),
            shard: Some(3),
            avatar_url: Some("https://cdn.example.com/avatar.png".to_string()),
            uptime: Some(Duration::from_secs(90061)),
        }
    }
}

impl BotStatus for FixedStatus {
    fn guild_count(&self) -> Option<usize> {
        self.guild_count
    }

    fn shard_for(&self, _guild_id: u64) -> Option<u64> {
        self.shard
    }

    fn avatar_url(&self) -> Option<String> {
        self.avatar_url.clone()
    }

    fn uptime(&self) -> Option<Duration> {
        self.uptime
    }
}

/// Announcement defaults that can be swapped after construction
pub struct MutableAnnouncements {
    templates: StdMutex<(MessageTemplate, MessageTemplate)>,
}

impl MutableAnnouncements {
    pub fn new(singular: &str, plural: &str) -> Arc<Self> {
        Arc::new(Self {
            templates: StdMutex::new((MessageTemplate::parse(singular), MessageTemplate::parse(plural))),
        })
    }

    pub fn set(&self, singular: &str, plural: &str) {
        let mut templates = self.templates.lock().unwrap();
        *templates = (MessageTemplate::parse(singular), MessageTemplate::parse(plural));
    }
}

impl AnnouncementFormatter for MutableAnnouncements {
    fn default_singular(&self) -> MessageTemplate {
        self.templates.lock().unwrap().0.clone()
    }

    fn default_plural(&self) -> MessageTemplate {
        self.templates.lock().unwrap().1.clone()
    }
}

pub fn test_context(prefix: &str) -> CommandContext {
    CommandContext::new(
        prefix,
        MutableAnnouncements::new("Happy birthday %n!", "Happy birthday to all of %n!"),
        Arc::new(FixedStatus::available()),
    )
    .with_version("1.2.3")
}

pub fn requester() -> Requester {
    Requester {
        id: 42,
        name: "tester".to_string(),
    }
}
