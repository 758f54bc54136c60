//! # Command System
//!
//! Prefix command (`bb.help`) handling for guild text channels.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Module contract, registry, dispatcher, help content

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod help_content;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use context::CommandContext;
pub use dispatcher::{Dispatcher, ParsedCommand};
pub use handler::{handler, CommandHandler, CommandModule, ReplyChannel, Requester};
pub use handlers::{create_all_modules, HelpInfoCommands};
pub use help_content::HelpContent;
pub use registry::CommandRegistry;
