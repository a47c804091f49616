//! Error types surfaced by notification sinks.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyErrorKind {
    #[error("transport failure: {message}")]
    Transport { message: String },
    #[error("HTTP {code}")]
    Status { code: u16 },
    #[error("malformed response: {message}")]
    Decode { message: String },
    #[error("no channel name contains '{name}'")]
    ChannelNotFound { name: String },
    #[error("refusing to send an empty message")]
    EmptyMessage,
}

impl NotifyErrorKind {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn channel_not_found(name: impl Into<String>) -> Self {
        Self::ChannelNotFound { name: name.into() }
    }
}

/// Notification failure together with the destination it targeted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("notification to '{destination}' failed: {kind}")]
pub struct NotifyError {
    pub destination: String,
    pub kind: NotifyErrorKind,
}

impl NotifyError {
    pub fn new(destination: impl Into<String>, kind: NotifyErrorKind) -> Self {
        Self {
            destination: destination.into(),
            kind,
        }
    }
}
