// Core layer - shared types and configuration
pub mod core;

// Features layer - collaborators read by commands
pub mod features;

// Gateway layer - serenity-backed channel and status adapters
pub mod gateway;

// Application layer
pub mod commands;

// Re-export core config
pub use core::Config;
