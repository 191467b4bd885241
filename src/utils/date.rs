//! Date and time helpers: ledger timestamps and history labels.

use crate::config::TimeZoneSetting;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, SecondsFormat, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Timestamp as stored in the ledgers, e.g. `2024-01-01T06:00:00Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Section title for a calendar day, e.g. `Jan 1st 24`.
pub fn section_title(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%b"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%y")
    )
}

/// Short clock label, e.g. `6:00 AM`.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Wall-clock time of `ts` in the configured zone.
pub fn time_in(ts: &DateTime<Utc>, tz: TimeZoneSetting) -> NaiveTime {
    match tz {
        TimeZoneSetting::Local => ts.with_timezone(&Local).time(),
        TimeZoneSetting::Utc => ts.time(),
    }
}
