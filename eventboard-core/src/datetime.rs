//! Parsing and formatting of the `date` and `time` strings stored on events.
//!
//! Events keep their date and time as two separate strings. Documents written
//! by the web form use `YYYY-MM-DD` and `HH:MM`; older documents use
//! `DD/MM/YYYY` and `hh:mm am/pm`. Both are accepted here and nowhere else.
//!
//! Accepted dates:
//! - `2024-12-25`
//! - `25/12/2024`
//!
//! Accepted times:
//! - `20:00`, `20:00:30`
//! - `08:00 pm`, `8:00PM`
//!
//! Anything else is rejected with a [`DateTimeError`]; nothing is guessed.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// Canonical formats written by eventboard.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";
pub const CANONICAL_TIME_FORMAT: &str = "%H:%M";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM or hh:mm am/pm")]
    InvalidTime(String),
}

pub fn parse_date(s: &str) -> Result<NaiveDate, DateTimeError> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DateTimeError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, DateTimeError> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DateTimeError::InvalidTime(s.to_string()))
}

/// The point in time an event starts at, or `None` if either half is unparseable.
pub fn event_instant(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date).ok()?;
    let time = parse_time(time).ok()?;
    Some(date.and_time(time))
}

/// Re-format a user-entered date into `YYYY-MM-DD`.
pub fn normalize_date(s: &str) -> Result<String, DateTimeError> {
    Ok(parse_date(s)?.format(CANONICAL_DATE_FORMAT).to_string())
}

/// Re-format a user-entered time into `HH:MM`.
pub fn normalize_time(s: &str) -> Result<String, DateTimeError> {
    Ok(parse_time(s)?.format(CANONICAL_TIME_FORMAT).to_string())
}

/// Human-readable date (e.g. "Wed, Dec 25, 2024"), or the raw string if it can't be parsed.
pub fn display_date(s: &str) -> String {
    match parse_date(s) {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => s.to_string(),
    }
}
