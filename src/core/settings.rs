//! Run settings loaded from `config/guild_ops.toml`.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::report::DEFAULT_REPORT_TITLE;

pub const DEFAULT_SETTINGS_PATH: &str = "config/guild_ops.toml";

const DEFAULT_GUILD_NAME: &str = "Elite Brotherhood";
const DEFAULT_CHANNEL_NAME: &str = "inactive-members-bot";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawSettings {
    #[serde(default)]
    report: RawReportSection,
    #[serde(default)]
    discord: RawDiscordSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawReportSection {
    guild_name: String,
    title: String,
}

impl Default for RawReportSection {
    fn default() -> Self {
        Self {
            guild_name: DEFAULT_GUILD_NAME.to_string(),
            title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDiscordSection {
    channel_name: String,
}

impl Default for RawDiscordSection {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {} ({message})", path.display())]
    Read { path: PathBuf, message: String },
    #[error("failed to parse {} ({message})", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Non-secret settings for a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub guild_name: String,
    pub report_title: String,
    pub channel_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        RawSettings::default().into()
    }
}

impl Settings {
    /// Reads and parses `path`; any read or parse failure is an error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path).map_err(|err| SettingsError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let raw = toml::from_str::<RawSettings>(&data).map_err(|err| SettingsError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(raw.into())
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!(target: "app", "{}. Falling back to defaults.", err);
            Self::default()
        })
    }

    /// Applies command-line overrides; blank overrides are ignored.
    pub fn with_overrides(mut self, guild_name: Option<&str>, channel_name: Option<&str>) -> Self {
        if let Some(name) = non_blank(guild_name) {
            self.guild_name = name;
        }
        if let Some(name) = non_blank(channel_name) {
            self.channel_name = name;
        }
        self
    }
}

impl From<RawSettings> for Settings {
    fn from(value: RawSettings) -> Self {
        Self {
            guild_name: or_default(&value.report.guild_name, DEFAULT_GUILD_NAME),
            report_title: or_default(&value.report.title, DEFAULT_REPORT_TITLE),
            channel_name: or_default(&value.discord.channel_name, DEFAULT_CHANNEL_NAME),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn or_default(value: &str, default: &str) -> String {
    non_blank(Some(value)).unwrap_or_else(|| default.to_string())
}
