//! Error types surfaced by roster providers.
use std::fmt;

use thiserror::Error;

/// Failure categories a roster lookup can end in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterErrorKind {
    #[error("transport failure: {message}")]
    Transport { message: String },
    #[error("HTTP {code}{}", status_detail(.detail))]
    Status { code: u16, detail: Option<String> },
    #[error("malformed response: {message}")]
    Decode { message: String },
    #[error("not found")]
    NotFound,
    #[error("guild has no guild hall record")]
    MissingGuildHall,
}

impl RosterErrorKind {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(code: u16, detail: Option<String>) -> Self {
        Self::Status { code, detail }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

fn status_detail(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => format!(" ({})", detail.trim()),
        _ => String::new(),
    }
}

/// Which provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterOperation {
    Guild,
    Character,
}

impl fmt::Display for RosterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Guild => "guild",
            Self::Character => "character",
        };
        write!(f, "{}", label)
    }
}

/// Full error with the operation and the entity it was asked about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} lookup for '{subject}' failed: {kind}")]
pub struct RosterError {
    pub operation: RosterOperation,
    pub subject: String,
    pub kind: RosterErrorKind,
}

impl RosterError {
    pub fn new(operation: RosterOperation, subject: impl Into<String>, kind: RosterErrorKind) -> Self {
        Self {
            operation,
            subject: subject.into(),
            kind,
        }
    }

    pub fn guild(subject: impl Into<String>, kind: RosterErrorKind) -> Self {
        Self::new(RosterOperation::Guild, subject, kind)
    }

    pub fn character(subject: impl Into<String>, kind: RosterErrorKind) -> Self {
        Self::new(RosterOperation::Character, subject, kind)
    }
}
