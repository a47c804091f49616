//! `guild-ops` entry point: secrets, logging, CLI parsing and exit status.
use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;

mod app;
mod core;
mod notify;
mod report;
mod roster;

use crate::{
    app::Delivery,
    core::{settings::SettingsError, Settings, DEFAULT_SETTINGS_PATH},
};

#[derive(Parser)]
#[command(
    name = "guild-ops",
    about = "Report inactive guild members to a Discord channel",
    version
)]
struct Cli {
    /// Guild to report on (overrides the settings file)
    #[arg(long, env = "GUILD_OPS_GUILD")]
    guild: Option<String>,

    /// Discord channel name to post into (substring match)
    #[arg(long, env = "GUILD_OPS_CHANNEL")]
    channel: Option<String>,

    /// Settings file; must exist when given, defaults to config/guild_ops.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the markdown report instead of posting it
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON instead of posting it
    #[arg(long, conflicts_with = "dry_run")]
    json: bool,
}

impl Cli {
    /// An explicit `--config` must load; the default path falls back to defaults.
    fn settings(&self) -> Result<Settings, SettingsError> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::load_or_default(Path::new(DEFAULT_SETTINGS_PATH)),
        };
        Ok(settings.with_overrides(self.guild.as_deref(), self.channel.as_deref()))
    }

    fn delivery(&self) -> Delivery {
        if self.json {
            Delivery::PrintJson
        } else if self.dry_run {
            Delivery::PrintMarkdown
        } else {
            Delivery::Discord
        }
    }
}

fn main() -> ExitCode {
    load_secrets_env();
    crate::core::logging::init();

    let cli = Cli::parse();
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(err) => return fail(&err),
    };

    match app::run(&settings, cli.delivery()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &dyn Error) -> ExitCode {
    eprintln!("Received unexpected error:\n{}", error_chain(err));
    ExitCode::FAILURE
}

fn load_secrets_env() {
    const SECRETS_FILES: [&str; 2] = ["secrets.env", ".env"];

    for file in SECRETS_FILES {
        let path = Path::new(file);
        if !path.exists() {
            continue;
        }

        if let Err(err) = dotenvy::from_filename(path) {
            eprintln!("Failed to load {}: {}", file, err);
        }
    }
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    message
}
