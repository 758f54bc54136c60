//! Command registry
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Build once from an ordered module list; first registration wins
//! - 1.0.0: Initial implementation for handler dispatch

use anyhow::{bail, Result};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::handler::{CommandHandler, CommandModule};

/// Immutable mapping from full command string (prefix + name) to handler
///
/// Keys are ASCII-lowercased, so lookups ignore ASCII case; any other
/// character must match exactly. Modules are merged in
/// the order given: when two modules declare the same name, the handler from
/// the earlier module is kept and the later one is skipped. A module that
/// declares the same name twice is rejected.
///
/// # Example
///
/// ```ignore
/// let modules: Vec<Arc<dyn CommandModule>> = vec![Arc::new(HelpInfoCommands::new(ctx))];
/// let registry = CommandRegistry::build("bb.", &modules)?;
///
/// if let Some(handler) = registry.get("bb.help") {
///     handler(args, channel, user).await?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    prefix: String,
    handlers: HashMap<String, CommandHandler>,
    order: Vec<String>,
}

impl CommandRegistry {
    /// Merge every module's commands under `prefix`
    pub fn build(prefix: &str, modules: &[Arc<dyn CommandModule>]) -> Result<Self> {
        let prefix = prefix.to_string();
        let mut handlers = HashMap::new();
        let mut order = Vec::new();

        for module in modules {
            let mut declared = HashSet::new();
            for (name, handler) in Arc::clone(module).commands() {
                let name = name.to_ascii_lowercase();
                if !declared.insert(name.clone()) {
                    bail!(
                        "module '{}' declares command '{}' more than once",
                        module.name(),
                        name
                    );
                }

                let full = format!("{prefix}{name}").to_ascii_lowercase();
                if handlers.contains_key(&full) {
                    debug!(
                        "Command '{full}' from module '{}' shadowed by an earlier module",
                        module.name()
                    );
                    continue;
                }
                handlers.insert(full.clone(), handler);
                order.push(full);
            }
        }

        info!("Registered {} commands from {} modules", order.len(), modules.len());
        Ok(Self {
            prefix,
            handlers,
            order,
        })
    }

    /// The prefix as configured
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get handler for a full command string
    ///
    /// Returns None if no handler is registered for the given command.
    pub fn get(&self, command: &str) -> Option<CommandHandler> {
        self.handlers.get(&command.to_ascii_lowercase()).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, command: &str) -> bool {
        self.handlers.contains_key(&command.to_ascii_lowercase())
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered full command strings, in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
