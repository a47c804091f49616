//! Error types surfaced by the report builder.
use thiserror::Error;

use crate::roster::RosterError;

#[derive(Debug, Clone, Error)]
pub enum ReportError {
    #[error("could not fetch guild '{guild}'")]
    GuildLookupFailed {
        guild: String,
        #[source]
        source: RosterError,
    },
    #[error("could not fetch character '{character}' of guild '{guild}'")]
    CharacterLookupFailed {
        guild: String,
        character: String,
        #[source]
        source: RosterError,
    },
}

impl ReportError {
    pub fn guild_lookup(guild: impl Into<String>, source: RosterError) -> Self {
        Self::GuildLookupFailed {
            guild: guild.into(),
            source,
        }
    }

    pub fn character_lookup(
        guild: impl Into<String>,
        character: impl Into<String>,
        source: RosterError,
    ) -> Self {
        Self::CharacterLookupFailed {
            guild: guild.into(),
            character: character.into(),
            source,
        }
    }
}
