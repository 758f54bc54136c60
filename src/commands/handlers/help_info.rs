//! Help and info command handlers
//!
//! Handles: help, help-config, help-tzdata, help-message, info
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::{handler, CommandHandler, CommandModule, ReplyChannel, Requester};
use crate::commands::help_content::{info_document, HelpContent};
use crate::core::Document;

/// Help and info commands; all arguments are accepted and ignored
pub struct HelpInfoCommands {
    ctx: CommandContext,
    content: HelpContent,
}

impl HelpInfoCommands {
    /// Build the module, rendering the help documents from the current context
    pub fn new(ctx: CommandContext) -> Self {
        let content = HelpContent::build(&ctx.prefix, &*ctx.announcements);
        Self { ctx, content }
    }

    pub fn content(&self) -> &HelpContent {
        &self.content
    }

    /// Reply with a prebuilt document
    fn reply_with(self: &Arc<Self>, pick: fn(&HelpContent) -> &Document) -> CommandHandler {
        let this = Arc::clone(self);
        handler(move |_args, channel, _user| {
            let this = Arc::clone(&this);
            async move { channel.send_document(pick(&this.content)).await }
        })
    }

    async fn cmd_info(
        self: Arc<Self>,
        channel: Arc<dyn ReplyChannel>,
        user: Requester,
    ) -> Result<()> {
        debug!("Composing info for user {} in guild {:?}", user.id, channel.guild_id());
        let document = info_document(&self.ctx, channel.guild_id());
        channel.send_document(&document).await
    }
}

impl CommandModule for HelpInfoCommands {
    fn name(&self) -> &'static str {
        "help-info"
    }

    fn context(&self) -> &CommandContext {
        &self.ctx
    }

    fn commands(self: Arc<Self>) -> Vec<(&'static str, CommandHandler)> {
        let info = {
            let this = Arc::clone(&self);
            handler(move |_args, channel, user| Arc::clone(&this).cmd_info(channel, user))
        };

        vec![
            ("help", self.reply_with(|c| &c.general)),
            ("help-config", self.reply_with(|c| &c.config)),
            ("help-tzdata", self.reply_with(|c| &c.tzdata)),
            ("help-message", self.reply_with(|c| &c.message)),
            ("info", info),
        ]
    }
}
