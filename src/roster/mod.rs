//! Roster lookups: guild member lists and per-character details.

pub mod config;
pub mod errors;
pub mod tibiadata;
pub mod types;

pub use config::TibiaDataConfig;
pub use errors::RosterError;
pub use tibiadata::TibiaDataClient;
pub use types::{CharacterDetail, Guild};

/// Contract every roster backend must satisfy.
pub trait RosterProvider: Send + Sync {
    fn guild(&self, name: &str) -> Result<Guild, RosterError>;

    fn character(&self, name: &str) -> Result<CharacterDetail, RosterError>;
}
