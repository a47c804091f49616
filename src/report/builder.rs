//! Inactivity report builder.
//!
//! Fetches the guild roster, then every member's character page one at a time in
//! roster order, and lists the members whose last login is at least
//! [`INACTIVITY_THRESHOLD_DAYS`] in the past. The first failing lookup aborts the
//! whole report; no partial report is ever returned.
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::roster::RosterProvider;

use super::{
    errors::ReportError,
    types::{GuildReport, InactiveMember},
};

pub const INACTIVITY_THRESHOLD_DAYS: i64 = 30;

const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Builds the report against the current wall clock.
pub fn build_report_now(
    provider: &dyn RosterProvider,
    guild_name: &str,
) -> Result<GuildReport, ReportError> {
    build_report(provider, guild_name, Utc::now())
}

pub fn build_report(
    provider: &dyn RosterProvider,
    guild_name: &str,
    now: DateTime<Utc>,
) -> Result<GuildReport, ReportError> {
    let guild = provider
        .guild(guild_name)
        .map_err(|err| ReportError::guild_lookup(guild_name, err))?;

    debug!(
        target: "report",
        "Guild '{}' has {} members, guild hall '{}' paid until {}",
        guild.name,
        guild.members.len(),
        guild.guild_hall.name,
        guild.guild_hall.paid_until
    );
    if guild.members_total as usize != guild.members.len() {
        warn!(
            target: "report",
            "Guild '{}' advertises {} members but lists {}",
            guild.name,
            guild.members_total,
            guild.members.len()
        );
    }

    let mut inactive_members = Vec::new();

    for member in &guild.members {
        let detail = provider
            .character(&member.name)
            .map_err(|err| ReportError::character_lookup(guild_name, &member.name, err))?;

        let days = elapsed_days(detail.last_login, now);
        debug!(
            target: "report",
            "{} ({}, {}, joined {}) last logged in {} days ago [{}{}]",
            detail.name,
            member.rank,
            member.status,
            member.joined,
            days,
            detail.account_status,
            if detail.traded { ", traded" } else { "" }
        );
        if let Some(deletion_date) = &detail.deletion_date {
            debug!(
                target: "report",
                "{} is scheduled for deletion on {}",
                detail.name,
                deletion_date
            );
        }

        if is_inactive(days) {
            inactive_members.push(InactiveMember {
                name: member.name.clone(),
                last_login_date: detail.last_login.format(REPORT_DATE_FORMAT).to_string(),
                days_elapsed: days,
            });
        }
    }

    let report = GuildReport::new(
        guild.name,
        inactive_members,
        guild.members.len(),
        format_date(guild.guild_hall.paid_until),
    );

    info!(
        target: "report",
        "Report for '{}': {} of {} members inactive",
        report.guild_name,
        report.inactive_members_count,
        report.members_count
    );

    Ok(report)
}

/// Whole days between `last_login` and `now`, rounding half days to even.
pub fn elapsed_days(last_login: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let hours = (now - last_login).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    (hours / HOURS_PER_DAY).round_ties_even() as i64
}

pub fn is_inactive(days_elapsed: i64) -> bool {
    days_elapsed >= INACTIVITY_THRESHOLD_DAYS
}

fn format_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{
        errors::{RosterError, RosterErrorKind},
        types::{CharacterDetail, Guild, GuildHall, GuildMember},
    };
    use chrono::{Duration, TimeZone};
    use std::{collections::HashMap, sync::Mutex};

    /// Roster double serving fixed data and recording every lookup.
    struct FixtureRoster {
        guild: Result<Guild, RosterErrorKind>,
        characters: HashMap<String, Result<CharacterDetail, RosterErrorKind>>,
        lookups: Mutex<Vec<String>>,
    }

    impl FixtureRoster {
        fn new(guild: Guild) -> Self {
            Self {
                guild: Ok(guild),
                characters: HashMap::new(),
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn failing_guild(kind: RosterErrorKind) -> Self {
            Self {
                guild: Err(kind),
                characters: HashMap::new(),
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn with_login(mut self, name: &str, last_login: DateTime<Utc>) -> Self {
            self.characters
                .insert(name.to_string(), Ok(CharacterDetail::new(name, last_login)));
            self
        }

        fn with_failure(mut self, name: &str, kind: RosterErrorKind) -> Self {
            self.characters.insert(name.to_string(), Err(kind));
            self
        }

        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    impl RosterProvider for FixtureRoster {
        fn guild(&self, name: &str) -> Result<Guild, RosterError> {
            self.lookups.lock().unwrap().push(format!("guild:{name}"));
            self.guild
                .clone()
                .map_err(|kind| RosterError::guild(name, kind))
        }

        fn character(&self, name: &str) -> Result<CharacterDetail, RosterError> {
            self.lookups.lock().unwrap().push(name.to_string());
            match self.characters.get(name) {
                Some(result) => result
                    .clone()
                    .map_err(|kind| RosterError::character(name, kind)),
                None => Err(RosterError::character(name, RosterErrorKind::NotFound)),
            }
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 8, 12, 0, 0).unwrap()
    }

    fn guild(members: &[&str]) -> Guild {
        let joined = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        Guild {
            name: "Elite Brotherhood".to_string(),
            guild_hall: GuildHall {
                name: "Castle of the Winds".to_string(),
                paid_until: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
            },
            members: members
                .iter()
                .map(|name| GuildMember::new(*name, joined, "Member", "offline"))
                .collect(),
            members_total: members.len() as u32,
        }
    }

    #[test]
    fn lists_inactive_members_in_roster_order() {
        let fordrin_login = now() - Duration::days(315);
        let ame_login = now() - Duration::days(69);
        let roster = FixtureRoster::new(guild(&["Elite Fordrin", "Ame Damnee"]))
            .with_login("Elite Fordrin", fordrin_login)
            .with_login("Ame Damnee", ame_login);

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert_eq!(report.version, "1.0");
        assert_eq!(
            report.inactive_members,
            vec![
                InactiveMember {
                    name: "Elite Fordrin".to_string(),
                    last_login_date: fordrin_login.format("%d-%m-%Y").to_string(),
                    days_elapsed: 315,
                },
                InactiveMember {
                    name: "Ame Damnee".to_string(),
                    last_login_date: ame_login.format("%d-%m-%Y").to_string(),
                    days_elapsed: 69,
                },
            ]
        );
        assert_eq!(report.inactive_members[0].last_login_date, "29-05-2023");
        assert_eq!(report.inactive_members[1].last_login_date, "30-01-2024");
        assert_eq!(report.inactive_members_count, 2);
        assert_eq!(report.members_count, 2);
        assert_eq!(report.guild_hall_paid_until, "30-01-2024");
    }

    #[test]
    fn inactive_entry_keeps_roster_name() {
        let mut roster = FixtureRoster::new(guild(&["Old Name"]));
        roster.characters.insert(
            "Old Name".to_string(),
            Ok(CharacterDetail::new("New Name", now() - Duration::days(90))),
        );

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert_eq!(report.inactive_members.len(), 1);
        assert_eq!(report.inactive_members[0].name, "Old Name");
        assert_eq!(report.inactive_members[0].days_elapsed, 90);
    }

    #[test]
    fn active_member_is_not_listed() {
        let roster = FixtureRoster::new(guild(&["Fresh Face"]))
            .with_login("Fresh Face", now() - Duration::days(10));

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert!(report.inactive_members.is_empty());
        assert_eq!(report.inactive_members_count, 0);
        assert_eq!(report.members_count, 1);
    }

    #[test]
    fn empty_guild_yields_empty_report() {
        let roster = FixtureRoster::new(guild(&[]));

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert!(report.inactive_members.is_empty());
        assert_eq!(report.members_count, 0);
        assert_eq!(roster.lookups(), ["guild:Elite Brotherhood"]);
    }

    #[test]
    fn exactly_thirty_days_is_inactive() {
        let roster = FixtureRoster::new(guild(&["Boundary"]))
            .with_login("Boundary", now() - Duration::hours(30 * 24));

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert_eq!(report.inactive_members.len(), 1);
        assert_eq!(report.inactive_members[0].days_elapsed, 30);
    }

    #[test]
    fn half_days_round_to_even() {
        let roster = FixtureRoster::new(guild(&["Rounds Up", "Rounds Down"]))
            .with_login("Rounds Up", now() - Duration::hours(29 * 24 + 12))
            .with_login("Rounds Down", now() - Duration::hours(28 * 24 + 12));

        let report = build_report(&roster, "Elite Brotherhood", now()).expect("report");

        assert_eq!(report.inactive_members.len(), 1);
        assert_eq!(report.inactive_members[0].name, "Rounds Up");
        assert_eq!(report.inactive_members[0].days_elapsed, 30);
        assert_eq!(report.members_count, 2);
    }

    #[test]
    fn elapsed_days_rounding() {
        let now = now();
        assert_eq!(elapsed_days(now - Duration::hours(29 * 24 + 12), now), 30);
        assert_eq!(elapsed_days(now - Duration::hours(28 * 24 + 12), now), 28);
        assert_eq!(elapsed_days(now - Duration::hours(30 * 24 + 11), now), 30);
        assert_eq!(elapsed_days(now - Duration::hours(30 * 24 + 13), now), 31);
        assert_eq!(elapsed_days(now + Duration::days(2), now), -2);
        assert!(!is_inactive(elapsed_days(now + Duration::days(40), now)));
    }

    #[test]
    fn guild_failure_aborts_report() {
        let roster = FixtureRoster::failing_guild(RosterErrorKind::status(404, None));

        let error = build_report(&roster, "Nobody", now()).expect_err("guild lookup fails");

        match error {
            ReportError::GuildLookupFailed { guild, source } => {
                assert_eq!(guild, "Nobody");
                assert_eq!(source.kind, RosterErrorKind::status(404, None));
            }
            other => panic!("expected guild lookup failure, got {other:?}"),
        }
        assert_eq!(roster.lookups(), ["guild:Nobody"]);
    }

    #[test]
    fn character_failure_stops_further_lookups() {
        let roster = FixtureRoster::new(guild(&["First", "Second", "Third"]))
            .with_login("First", now() - Duration::days(90))
            .with_failure("Second", RosterErrorKind::transport("connection reset"))
            .with_login("Third", now() - Duration::days(90));

        let error = build_report(&roster, "Elite Brotherhood", now())
            .expect_err("second lookup fails");

        match error {
            ReportError::CharacterLookupFailed {
                guild,
                character,
                source,
            } => {
                assert_eq!(guild, "Elite Brotherhood");
                assert_eq!(character, "Second");
                assert!(matches!(source.kind, RosterErrorKind::Transport { .. }));
            }
            other => panic!("expected character lookup failure, got {other:?}"),
        }
        assert_eq!(
            roster.lookups(),
            ["guild:Elite Brotherhood", "First", "Second"]
        );
    }
}
