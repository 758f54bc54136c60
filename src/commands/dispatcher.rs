//! Prefix command dispatch
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Prefix matching, whitespace tokenizing, isolated handler tasks

use log::{debug, error, info};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::handler::{ReplyChannel, Requester};
use super::registry::CommandRegistry;

/// A message that addressed the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Full command string (prefix + name), ASCII-lowercased
    pub command: String,
    /// Remaining whitespace-separated tokens
    pub args: Vec<String>,
}

/// Routes incoming message text to registered handlers
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Split message text into a command and its arguments
    ///
    /// The first whitespace-separated token must start with the prefix
    /// (ASCII case-insensitive) and carry a non-empty name after it.
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        let prefix = self.registry.prefix();
        let mut tokens = text.split_whitespace();
        let first = tokens.next()?;

        let head = first.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) || first.len() == prefix.len() {
            return None;
        }

        Some(ParsedCommand {
            command: first.to_ascii_lowercase(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Dispatch message text, spawning the matched handler
    ///
    /// Returns None when the text is not a registered command. Otherwise the
    /// handler runs on its own task; a returned error or a panic is logged and
    /// goes no further. The returned handle completes once the handler has
    /// finished and its outcome has been logged.
    pub fn dispatch(
        &self,
        text: &str,
        channel: Arc<dyn ReplyChannel>,
        user: Requester,
    ) -> Option<JoinHandle<()>> {
        let parsed = self.parse(text)?;
        let Some(handler) = self.registry.get(&parsed.command) else {
            debug!("Unknown command: {}", parsed.command);
            return None;
        };

        let request_id = Uuid::new_v4();
        let command = parsed.command;
        info!(
            "[{request_id}] 🎯 Processing command: {command} | Args: {} | User: {} ({})",
            parsed.args.len(),
            user.name,
            user.id
        );

        let args = parsed.args;
        let task = tokio::spawn(async move { handler(args, channel, user).await });
        Some(tokio::spawn(async move {
            match task.await {
                Ok(Ok(())) => info!("[{request_id}] ✅ Command {command} completed"),
                Ok(Err(e)) => error!("[{request_id}] ❌ Command {command} failed: {e:#}"),
                Err(e) if e.is_panic() => error!("[{request_id}] 💥 Command {command} panicked"),
                Err(e) => error!("[{request_id}] ❌ Command {command} task aborted: {e}"),
            }
        }))
    }
}
