//! Roster data returned by guild/character providers.
use chrono::{DateTime, NaiveDate, Utc};

/// Single entry of a guild's member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub name: String,
    pub joined: NaiveDate,
    pub rank: String,
    pub status: String,
}

impl GuildMember {
    pub fn new(
        name: impl Into<String>,
        joined: NaiveDate,
        rank: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            joined,
            rank: rank.into(),
            status: status.into(),
        }
    }
}

/// Guild property whose rent keeps the guild hall; surfaced as a payment reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildHall {
    pub name: String,
    pub paid_until: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub name: String,
    pub guild_hall: GuildHall,
    pub members: Vec<GuildMember>,
    /// Member count as advertised by the provider; may disagree with `members.len()`.
    pub members_total: u32,
}

/// Character page details needed to judge activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub name: String,
    pub last_login: DateTime<Utc>,
    pub account_status: String,
    pub traded: bool,
    pub deletion_date: Option<String>,
}

impl CharacterDetail {
    pub fn new(name: impl Into<String>, last_login: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_login,
            account_status: String::new(),
            traded: false,
            deletion_date: None,
        }
    }
}
