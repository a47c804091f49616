//! Report delivery to chat channels.

pub mod config;
pub mod discord;
pub mod errors;

pub use config::DiscordConfig;
pub use discord::DiscordClient;
pub use errors::NotifyError;

/// Contract every notification backend must satisfy.
pub trait NotificationSink: Send + Sync {
    fn send(&self, destination: &str, body: &str) -> Result<(), NotifyError>;
}
