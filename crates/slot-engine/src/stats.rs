//! Service statistics for the admin dashboard.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booking::{BookingStatus, DatedBooking};

/// Counts over a set of scheduled services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatistics {
    pub total: usize,
    /// Scheduled or confirmed: work that is booked but not started.
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Services dated on or after the most recent Sunday.
    pub this_week: usize,
    /// Services dated on or after the first of the current month.
    pub this_month: usize,
}

/// The Sunday on or before `today`.
pub fn start_of_week(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
}

pub fn start_of_month(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.day0()))
}

impl ServiceStatistics {
    /// Tally `services` relative to `today`.
    ///
    /// Week and month counts include future-dated services.
    pub fn compute(services: &[DatedBooking], today: NaiveDate) -> Self {
        let week = start_of_week(today);
        let month = start_of_month(today);

        services.iter().fold(Self::default(), |mut acc, s| {
            acc.total += 1;
            match s.booking.status {
                BookingStatus::Scheduled | BookingStatus::Confirmed => acc.scheduled += 1,
                BookingStatus::Completed => acc.completed += 1,
                BookingStatus::Cancelled => acc.cancelled += 1,
                BookingStatus::InProgress | BookingStatus::Rescheduled => {}
            }
            if s.date >= week {
                acc.this_week += 1;
            }
            if s.date >= month {
                acc.this_month += 1;
            }
            acc
        })
    }
}
