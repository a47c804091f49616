//! Report shapes produced by the inactivity builder.
use serde::Serialize;

pub const REPORT_FORMAT_VERSION: &str = "1.0";

/// Member whose last login is at least the inactivity threshold in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InactiveMember {
    pub name: String,
    /// `DD-MM-YYYY`
    pub last_login_date: String,
    pub days_elapsed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildReport {
    pub version: String,
    pub guild_name: String,
    pub inactive_members: Vec<InactiveMember>,
    pub inactive_members_count: usize,
    pub members_count: usize,
    /// `DD-MM-YYYY`
    pub guild_hall_paid_until: String,
}

impl GuildReport {
    pub fn new(
        guild_name: impl Into<String>,
        inactive_members: Vec<InactiveMember>,
        members_count: usize,
        guild_hall_paid_until: impl Into<String>,
    ) -> Self {
        Self {
            version: REPORT_FORMAT_VERSION.to_string(),
            guild_name: guild_name.into(),
            inactive_members_count: inactive_members.len(),
            inactive_members,
            members_count,
            guild_hall_paid_until: guild_hall_paid_until.into(),
        }
    }
}
