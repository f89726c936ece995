use serenity::model::id::{ChannelId, GuildId};

use crate::error::{Result, StoreError};

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Bot token used for the HTTP client
    pub token: String,

    /// Guild whose channels are managed
    pub guild_id: GuildId,

    /// Category new channels are created in, if any
    pub category_id: Option<ChannelId>,

    /// Log level name (e.g. "info", "debug")
    pub log_level: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| StoreError::Config {
                message: "Missing DISCORD_TOKEN environment variable".to_string(),
            })?;

        let guild_id = lookup("DISCORD_GUILD_ID")
            .ok_or_else(|| StoreError::Config {
                message: "Missing DISCORD_GUILD_ID environment variable".to_string(),
            })
            .and_then(|s| parse_snowflake("DISCORD_GUILD_ID", &s))
            .map(GuildId::new)?;

        let category_id = lookup("DISCORD_CATEGORY_ID")
            .map(|s| parse_snowflake("DISCORD_CATEGORY_ID", &s).map(ChannelId::new))
            .transpose()?;

        Ok(Self {
            token,
            guild_id,
            category_id,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Parse a non-zero snowflake
pub fn parse_snowflake(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|v| *v != 0)
        .ok_or_else(|| StoreError::Config {
            message: format!("{} is not a valid snowflake: '{}'", key, value),
        })
}
