//! Command module contract and handler values
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Handlers are function values grouped by module; prefix-command surface
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::context::CommandContext;
use crate::core::Document;

/// Destination a handler replies to
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    /// Server the channel belongs to, if any
    fn guild_id(&self) -> Option<u64>;

    /// Deliver a structured document to this channel
    async fn send_document(&self, document: &Document) -> Result<()>;
}

/// The user who invoked a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: u64,
    pub name: String,
}

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<()>> + Send + 'static>>;

/// A command handler: (argument tokens, reply channel, invoking user) → completion
pub type CommandHandler =
    Arc<dyn Fn(Vec<String>, Arc<dyn ReplyChannel>, Requester) -> HandlerFuture + Send + Sync>;

/// Wrap an async function or closure as a [`CommandHandler`]
pub fn handler<F, Fut>(f: F) -> CommandHandler
where
    F: Fn(Vec<String>, Arc<dyn ReplyChannel>, Requester) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    Arc::new(move |args, channel, user| Box::pin(f(args, channel, user)))
}

/// A unit that contributes commands to the registry
///
/// Construction must not perform I/O. Each module lists its commands in a
/// fixed order and never declares the same name twice; the registry treats a
/// repeated name as a startup error.
///
/// # Example
///
/// ```ignore
/// struct PingCommands { ctx: Arc<CommandContext> }
///
/// impl CommandModule for PingCommands {
///     fn name(&self) -> &'static str { "ping" }
///     fn context(&self) -> &CommandContext { &self.ctx }
///     fn commands(self: Arc<Self>) -> Vec<(&'static str, CommandHandler)> {
///         vec![("ping", handler(|_args, channel, _user| async move {
///             channel.send_document(&Document::new().description("Pong!")).await
///         }))]
///     }
/// }
/// ```
pub trait CommandModule: Send + Sync {
    /// Name used in logs and startup errors
    fn name(&self) -> &'static str;

    /// Shared facilities (prefix, announcement defaults, status)
    fn context(&self) -> &CommandContext;

    /// Ordered (command name, handler) pairs
    fn commands(self: Arc<Self>) -> Vec<(&'static str, CommandHandler)>;

    /// The live command prefix
    fn prefix(&self) -> &str {
        &self.context().prefix
    }
}
