//! Calendar helpers. Every input is read as a UTC date; the host timezone
//! is never consulted.

use crate::utils::error::{DemoError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| DemoError::InvalidDate {
        value: date_str.to_string(),
        reason: e.to_string(),
    })
}

/// Plain dates are midnight UTC; RFC 3339 timestamps keep their time of day.
fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(instant.with_timezone(&Utc));
    }
    let date = parse_date(value)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Replaces the first `YYYY`, `MM` and `DD` token in `format`.
pub fn format_date(date_str: &str, format: &str) -> Result<String> {
    let date = parse_date(date_str)?;
    Ok(format
        .replacen("YYYY", &format!("{:04}", date.year()), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1))
}

/// Absolute difference in whole days, rounded up.
pub fn days_between(date1: &str, date2: &str) -> Result<i64> {
    let d1 = parse_instant(date1)?;
    let d2 = parse_instant(date2)?;
    let millis = (d2 - d1).num_milliseconds().abs();
    Ok((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

pub fn is_weekend(date_str: &str) -> Result<bool> {
    let date = parse_date(date_str)?;
    Ok(matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
}

pub fn add_days(date_str: &str, days: i64) -> Result<NaiveDate> {
    let date = parse_date(date_str)?;
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| DemoError::InvalidArgument {
            name: "days".to_string(),
            reason: format!("{} + {} days is out of range", date, days),
        })
}
