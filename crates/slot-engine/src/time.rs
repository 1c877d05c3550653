//! Time-of-day value type.
//!
//! Bookings and business hours arrive as `"HH:MM"` strings. They are parsed
//! into a [`TimeOfDay`] (minutes since midnight) once, at the boundary, so the
//! slot arithmetic never re-parses strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time within a single calendar day, at minute precision.
///
/// Always in `00:00..=23:59`. Serializes as a zero-padded `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Compile-time constructor for literal times. Panics on out-of-range
    /// input, so use [`TimeOfDay::from_hm`] for anything not a literal.
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self(hour * 60 + minute)
    }

    /// Build from minutes since midnight. Returns `None` at or past 24:00.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Build from an hour/minute pair.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!(
                "{}:{:02} is out of range",
                hour, minute
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Truncate an instant to its time of day, dropping seconds.
    pub fn from_instant(instant: NaiveDateTime) -> Self {
        Self((instant.hour() * 60 + instant.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Render as a 12-hour clock string, e.g. `"9:30 AM"` or `"12:00 PM"`.
    pub fn to_12h(self) -> String {
        let hour = self.hour();
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let display = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{}:{:02} {}", display, self.minute(), suffix)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Accepts `"H:MM"` and `"HH:MM"`. The minute field is always two digits.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(format!("'{}' is not H:MM or HH:MM", s));

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !all_digits(h) || !all_digits(m) {
            return Err(invalid());
        }

        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Anchor a time of day on a calendar day, producing an orderable instant.
pub fn to_instant(day: NaiveDate, time: TimeOfDay) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(time.minutes()))
}

/// Format an instant's wall-clock time as zero-padded `"HH:MM"`.
pub fn format_hhmm(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// Minutes from `start` to `end`. Negative when `end` precedes `start`.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    i64::from(end.minutes()) - i64::from(start.minutes())
}

