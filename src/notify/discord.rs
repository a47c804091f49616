//! Discord REST backed notification sink.
use reqwest::{blocking::Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    config::{DiscordConfig, DiscordConfigError},
    errors::{NotifyError, NotifyErrorKind},
    NotificationSink,
};

/// Text channel inside a Discord guild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscordChannel {
    pub id: String,
    pub name: String,
}

pub struct DiscordClient {
    http: Client,
    config: DiscordConfig,
}

impl DiscordClient {
    pub fn new(config: DiscordConfig) -> Result<Self, DiscordConfigError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| DiscordConfigError::ClientBuild(err.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn guild_id(&self) -> &str {
        &self.config.guild_id
    }

    /// First channel of `guild_id` whose name contains `name`.
    pub fn find_channel(&self, guild_id: &str, name: &str) -> Result<DiscordChannel, NotifyError> {
        let fail = |kind: NotifyErrorKind| NotifyError::new(format!("guild {guild_id}"), kind);

        let url = self.config.endpoint(&format!("guilds/{guild_id}/channels"));
        debug!(target: "notify", "GET {}", url);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.config.authorization())
            .send()
            .map_err(|err| fail(NotifyErrorKind::transport(err.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(NotifyErrorKind::Status {
                code: status.as_u16(),
            }));
        }

        let channels: Vec<DiscordChannel> = response
            .json()
            .map_err(|err| fail(NotifyErrorKind::decode(err.to_string())))?;

        select_channel(channels, name).ok_or_else(|| fail(NotifyErrorKind::channel_not_found(name)))
    }
}

impl NotificationSink for DiscordClient {
    fn send(&self, destination: &str, body: &str) -> Result<(), NotifyError> {
        if body.trim().is_empty() {
            return Err(NotifyError::new(destination, NotifyErrorKind::EmptyMessage));
        }

        let url = self
            .config
            .endpoint(&format!("channels/{destination}/messages"));
        debug!(target: "notify", "POST {} ({} bytes)", url, body.len());

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.config.authorization())
            .json(&MessageBody { content: body })
            .send()
            .map_err(|err| {
                NotifyError::new(destination, NotifyErrorKind::transport(err.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::new(
                destination,
                NotifyErrorKind::Status {
                    code: status.as_u16(),
                },
            ));
        }

        info!(target: "notify", "Posted report to Discord channel {}", destination);
        Ok(())
    }
}

fn select_channel(channels: Vec<DiscordChannel>, name: &str) -> Option<DiscordChannel> {
    channels
        .into_iter()
        .find(|channel| channel.name.contains(name))
}

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    content: &'a str,
}
