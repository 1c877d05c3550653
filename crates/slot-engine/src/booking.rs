//! Booking records and the booking status lifecycle.
//!
//! A booking occupies `[start, end)` on one calendar day. Whether it blocks
//! other work depends only on its current status: everything except
//! `cancelled` blocks.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// Lifecycle status of a scheduled service.
///
/// ```text
/// scheduled ──► confirmed ──► in_progress ──► completed
///     │  ▲          │
///     ▼  │          ▼
///  rescheduled ◄────┘      (cancelled reachable from scheduled,
///                           confirmed, and rescheduled)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Rescheduled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rescheduled => "rescheduled",
        }
    }

    /// Whether a booking in this status occupies its interval.
    ///
    /// In-progress and completed bookings still block the rest of their day.
    pub fn is_blocking(self) -> bool {
        self != BookingStatus::Cancelled
    }

    /// Completed and cancelled bookings never change status again.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Scheduled, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Scheduled, Cancelled)
                | (Confirmed, Cancelled)
                | (Scheduled, Rescheduled)
                | (Confirmed, Rescheduled)
                | (Rescheduled, Scheduled)
                | (Rescheduled, Confirmed)
                | (Rescheduled, Cancelled)
        )
    }

    /// Move to `next`, or fail if the lifecycle does not allow it.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTransition` for a disallowed move.
    pub fn transition(self, next: BookingStatus) -> Result<BookingStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(SlotError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scheduled" => Ok(BookingStatus::Scheduled),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "in_progress" => Ok(BookingStatus::InProgress),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "rescheduled" => Ok(BookingStatus::Rescheduled),
            other => Err(SlotError::InvalidBooking(format!(
                "unknown status '{}'",
                other
            ))),
        }
    }
}

/// A reserved interval on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingFields")]
pub struct Booking {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub status: BookingStatus,
}

impl Booking {
    /// Parse a booking from `"HH:MM"` strings.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if either time is malformed, and
    /// `SlotError::InvalidBooking` if `end` precedes `start`.
    pub fn new(start: &str, end: &str, status: BookingStatus) -> Result<Self> {
        Self::from_times(start.parse()?, end.parse()?, status)
    }

    /// Build a booking from already-parsed times.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidBooking` if `end` precedes `start`.
    pub fn from_times(start: TimeOfDay, end: TimeOfDay, status: BookingStatus) -> Result<Self> {
        if end < start {
            return Err(SlotError::InvalidBooking(format!(
                "end {} precedes start {}",
                end, start
            )));
        }
        Ok(Self { start, end, status })
    }

    pub fn is_blocking(&self) -> bool {
        self.status.is_blocking()
    }

    pub fn duration_minutes(&self) -> i64 {
        crate::time::duration_minutes(self.start, self.end)
    }
}

#[derive(Deserialize)]
struct BookingFields {
    start: TimeOfDay,
    end: TimeOfDay,
    status: BookingStatus,
}

impl TryFrom<BookingFields> for Booking {
    type Error = SlotError;

    fn try_from(fields: BookingFields) -> Result<Self> {
        Booking::from_times(fields.start, fields.end, fields.status)
    }
}

/// A booking tagged with the calendar day it falls on.
///
/// Serialized flat: `{"date": "2026-03-16", "start": "09:00", "end": "10:00", "status": "scheduled"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedBooking {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub booking: Booking,
}

