//! TibiaData v4 backed roster provider.
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{blocking::Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use super::{
    config::{TibiaDataConfig, TibiaDataConfigError},
    errors::{RosterError, RosterErrorKind, RosterOperation},
    types::{CharacterDetail, Guild, GuildHall, GuildMember},
    RosterProvider,
};

const GUILD_RESOURCE: &str = "guild";
const CHARACTER_RESOURCE: &str = "character";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Roster provider talking to the public TibiaData API.
pub struct TibiaDataClient {
    http: Client,
    config: TibiaDataConfig,
}

impl TibiaDataClient {
    pub fn new(config: TibiaDataConfig) -> Result<Self, TibiaDataConfigError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| TibiaDataConfigError::ClientBuild(err.to_string()))?;

        Ok(Self { http, config })
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        operation: RosterOperation,
        resource: &str,
        name: &str,
    ) -> Result<T, RosterError> {
        let url = self.config.resource_url(resource, name).map_err(|err| {
            RosterError::new(operation, name, RosterErrorKind::transport(err.to_string()))
        })?;

        self.get_json(&url)
            .map_err(|kind| RosterError::new(operation, name, kind))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RosterErrorKind> {
        debug!(target: "roster", "GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|err| RosterErrorKind::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<TibiaDataEnvelope>()
                .ok()
                .and_then(|body| body.information.status.message)
                .or_else(|| status.canonical_reason().map(str::to_string));
            return Err(status_error(status, detail));
        }

        response
            .json::<T>()
            .map_err(|err| RosterErrorKind::decode(err.to_string()))
    }
}

impl RosterProvider for TibiaDataClient {
    fn guild(&self, name: &str) -> Result<Guild, RosterError> {
        let body: GuildResponse = self.fetch(RosterOperation::Guild, GUILD_RESOURCE, name)?;
        into_guild(body.guild).map_err(|kind| RosterError::guild(name, kind))
    }

    fn character(&self, name: &str) -> Result<CharacterDetail, RosterError> {
        let body: CharacterResponse =
            self.fetch(RosterOperation::Character, CHARACTER_RESOURCE, name)?;
        into_character(body.character.character).map_err(|kind| RosterError::character(name, kind))
    }
}

fn status_error(status: StatusCode, detail: Option<String>) -> RosterErrorKind {
    RosterErrorKind::status(status.as_u16(), detail)
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, RosterErrorKind> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|err| RosterErrorKind::decode(format!("{field} '{value}': {err}")))
}

fn into_guild(raw: RawGuild) -> Result<Guild, RosterErrorKind> {
    if raw.name.trim().is_empty() {
        return Err(RosterErrorKind::NotFound);
    }

    let hall = raw
        .guildhalls
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(RosterErrorKind::MissingGuildHall)?;

    let guild_hall = GuildHall {
        paid_until: parse_date("paid_until", &hall.paid_until)?,
        name: hall.name,
    };

    let members = raw
        .members
        .unwrap_or_default()
        .into_iter()
        .map(|member| {
            Ok(GuildMember::new(
                member.name,
                parse_date("joined", &member.joined)?,
                member.rank,
                member.status,
            ))
        })
        .collect::<Result<Vec<_>, RosterErrorKind>>()?;

    Ok(Guild {
        name: raw.name,
        guild_hall,
        members,
        members_total: raw.members_total,
    })
}

fn into_character(raw: RawCharacter) -> Result<CharacterDetail, RosterErrorKind> {
    if raw.name.trim().is_empty() {
        return Err(RosterErrorKind::NotFound);
    }

    let last_login = DateTime::parse_from_rfc3339(raw.last_login.trim())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|err| {
            RosterErrorKind::decode(format!("last_login '{}': {err}", raw.last_login))
        })?;

    let deletion_date = Some(raw.deletion_date.trim().to_string()).filter(|date| !date.is_empty());

    Ok(CharacterDetail {
        account_status: raw.account_status,
        traded: raw.traded,
        deletion_date,
        ..CharacterDetail::new(raw.name, last_login)
    })
}

#[derive(Debug, Deserialize)]
struct TibiaDataEnvelope {
    information: Information,
}

#[derive(Debug, Deserialize)]
struct Information {
    #[serde(default)]
    status: InformationStatus,
}

#[derive(Debug, Default, Deserialize)]
struct InformationStatus {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GuildResponse {
    guild: RawGuild,
}

#[derive(Debug, Deserialize)]
struct RawGuild {
    #[serde(default)]
    name: String,
    #[serde(default)]
    guildhalls: Option<Vec<RawGuildHall>>,
    #[serde(default)]
    members: Option<Vec<RawMember>>,
    #[serde(default)]
    members_total: u32,
}

#[derive(Debug, Deserialize)]
struct RawGuildHall {
    #[serde(default)]
    name: String,
    paid_until: String,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    name: String,
    #[serde(default)]
    rank: String,
    #[serde(default)]
    status: String,
    joined: String,
}

#[derive(Debug, Deserialize)]
struct CharacterResponse {
    character: CharacterInfo,
}

#[derive(Debug, Deserialize)]
struct CharacterInfo {
    character: RawCharacter,
}

#[derive(Debug, Deserialize)]
struct RawCharacter {
    #[serde(default)]
    name: String,
    #[serde(default)]
    traded: bool,
    #[serde(default)]
    deletion_date: String,
    #[serde(default)]
    last_login: String,
    #[serde(default)]
    account_status: String,
}
