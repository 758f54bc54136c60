//! Per-module command implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: HelpInfoCommands (help, help-config, help-tzdata, help-message, info)

pub mod help_info;

use std::sync::Arc;

use super::context::CommandContext;
use super::handler::CommandModule;

pub use help_info::HelpInfoCommands;

/// Create all command modules, in registration order
///
/// Earlier modules take precedence when two declare the same command name.
pub fn create_all_modules(ctx: &CommandContext) -> Vec<Arc<dyn CommandModule>> {
    vec![Arc::new(HelpInfoCommands::new(ctx.clone()))]
}
