//! # Core Module
//!
//! Core domain types, configuration, and rendering helpers for the birthday bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Config, structured documents, message templates, embed rendering

pub mod config;
pub mod document;
pub mod embeds;
pub mod response;
pub mod template;

// Re-export commonly used items
pub use config::Config;
pub use document::{Document, Section};
pub use embeds::document_embed;
pub use template::{MessageTemplate, NAME_TOKEN};
