//! Discord bot settings read from the environment.
use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://discord.com/api";
const DEFAULT_API_VERSION: &str = "v10";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Discord bot configuration sourced from the environment.
#[derive(Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub guild_id: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl DiscordConfig {
    pub fn from_env() -> Result<Self, DiscordConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; the token and guild id are required.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DiscordConfigError> {
        let optional = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required =
            |key: &'static str| optional(key).ok_or(DiscordConfigError::Missing(key));

        let bot_token = required("DISCORD_BOT_TOKEN")?;
        let guild_id = required("DISCORD_GUILD_ID")?;

        let base_url = optional("DISCORD_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_version =
            optional("DISCORD_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let timeout = optional("DISCORD_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            bot_token,
            guild_id,
            base_url,
            api_version,
            timeout,
        })
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bot {}", self.bot_token)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("bot_token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum DiscordConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("client build failure: {0}")]
    ClientBuild(String),
}
