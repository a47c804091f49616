//! Wires settings, roster provider, report builder and notification sink into one run.
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::{
    core::settings::Settings,
    notify::{
        config::DiscordConfigError, DiscordClient, DiscordConfig, NotificationSink, NotifyError,
    },
    report::{build_report, build_report_now, render_markdown, GuildReport, ReportError},
    roster::{config::TibiaDataConfigError, RosterProvider, TibiaDataClient, TibiaDataConfig},
};

/// Where the finished report goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    #[default]
    Discord,
    PrintMarkdown,
    PrintJson,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    RosterConfig(#[from] TibiaDataConfigError),
    #[error(transparent)]
    DiscordConfig(#[from] DiscordConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn run(settings: &Settings, delivery: Delivery) -> Result<(), AppError> {
    let roster = TibiaDataClient::new(TibiaDataConfig::from_env())?;

    match delivery {
        Delivery::Discord => {
            let discord = DiscordClient::new(DiscordConfig::from_env()?)?;
            let channel = discord.find_channel(discord.guild_id(), &settings.channel_name)?;
            info!(
                target: "app",
                "Delivering to #{} ({})",
                channel.name,
                channel.id
            );
            publish(&roster, &discord, &channel.id, settings, Utc::now())?;
        }
        Delivery::PrintMarkdown | Delivery::PrintJson => {
            let report = build_report_now(&roster, &settings.guild_name)?;
            println!("{}", render_output(&report, settings, delivery)?);
        }
    }

    Ok(())
}

/// Builds the report and sends its markdown rendering to `destination`.
pub fn publish(
    roster: &dyn RosterProvider,
    sink: &dyn NotificationSink,
    destination: &str,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Result<GuildReport, AppError> {
    let report = build_report(roster, &settings.guild_name, now)?;
    let markdown = render_markdown(&report, &settings.report_title);
    sink.send(destination, &markdown)?;
    Ok(report)
}

fn render_output(
    report: &GuildReport,
    settings: &Settings,
    delivery: Delivery,
) -> Result<String, AppError> {
    match delivery {
        Delivery::PrintJson => Ok(serde_json::to_string_pretty(report)?),
        Delivery::Discord | Delivery::PrintMarkdown => {
            Ok(render_markdown(report, &settings.report_title))
        }
    }
}
