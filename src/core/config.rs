//! # Configuration
//!
//! Environment-driven bot configuration, loaded once at startup.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, command prefix, log level and shard count

use anyhow::{anyhow, bail, Result};

pub const DEFAULT_COMMAND_PREFIX: &str = "bb.";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub log_level: String,
    pub shard_count: u64,
}

impl Config {
    /// Load from the process environment (after reading `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN must be set"))?;

        let command_prefix = lookup("COMMAND_PREFIX")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());
        if command_prefix.is_empty() {
            bail!("COMMAND_PREFIX must not be empty");
        }
        if command_prefix.chars().any(char::is_whitespace) {
            bail!("COMMAND_PREFIX must not contain whitespace: {command_prefix:?}");
        }

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let shard_count = match lookup("SHARD_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow!("SHARD_COUNT is not a number ({raw:?}): {e}"))?,
            None => 1,
        };
        if shard_count == 0 {
            bail!("SHARD_COUNT must be at least 1");
        }

        Ok(Self {
            discord_token,
            command_prefix,
            log_level,
            shard_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("DISCORD_TOKEN", "abc")]).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.command_prefix, DEFAULT_COMMAND_PREFIX);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.shard_count, 1);
    }

    #[test]
    fn test_missing_token_is_error() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn test_custom_values() {
        let config = load(&[
            ("DISCORD_TOKEN", "abc"),
            ("COMMAND_PREFIX", "!"),
            ("LOG_LEVEL", "debug"),
            ("SHARD_COUNT", "4"),
        ])
        .unwrap();
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.shard_count, 4);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("COMMAND_PREFIX", "   ")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("COMMAND_PREFIX", "b b")]).is_err());
    }

    #[test]
    fn test_invalid_shard_count_rejected() {
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("SHARD_COUNT", "0")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("SHARD_COUNT", "many")]).is_err());
    }
}
