//! Data-access seam: fetching one day's bookings.
//!
//! The calculator in [`crate::slots`] never performs I/O. Callers that hold a
//! booking store implement [`BookingSource`] and go through
//! [`available_start_slots`] / [`available_end_options`], which keep a failed
//! fetch ("availability unknown") apart from an empty answer ("no room").

use std::convert::Infallible;
use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::booking::{Booking, DatedBooking};
use crate::error::{Result, SlotError};
use crate::slots::{compute_end_options, compute_start_slots, SlotOptions};
use crate::time::TimeOfDay;

/// Anything that can list the bookings on a calendar day.
///
/// Implementations return every booking for the day regardless of status;
/// the calculator decides which ones block.
pub trait BookingSource {
    type Error: fmt::Display;

    fn bookings_for(&self, day: NaiveDate) -> std::result::Result<Vec<Booking>, Self::Error>;
}

/// A booking store held in memory, e.g. a snapshot loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookings {
    bookings: Vec<DatedBooking>,
}

impl InMemoryBookings {
    pub fn new(bookings: Vec<DatedBooking>) -> Self {
        Self { bookings }
    }

    pub fn all(&self) -> &[DatedBooking] {
        &self.bookings
    }

    pub fn push(&mut self, booking: DatedBooking) {
        self.bookings.push(booking);
    }
}

impl BookingSource for InMemoryBookings {
    type Error = Infallible;

    fn bookings_for(&self, day: NaiveDate) -> std::result::Result<Vec<Booking>, Infallible> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.date == day)
            .map(|b| b.booking.clone())
            .collect())
    }
}

fn fetch<S: BookingSource>(source: &S, day: NaiveDate) -> Result<Vec<Booking>> {
    let bookings = source.bookings_for(day).map_err(|e| {
        debug!(%day, error = %e, "booking fetch failed");
        SlotError::Fetch(e.to_string())
    })?;
    debug!(%day, count = bookings.len(), "fetched bookings");
    Ok(bookings)
}

/// Fetch the day's bookings from `source`, then compute start slots.
///
/// # Errors
/// Returns `SlotError::Fetch` if the source fails, or any error of
/// [`compute_start_slots`].
pub fn available_start_slots<S: BookingSource>(
    source: &S,
    day: NaiveDate,
    options: &SlotOptions,
) -> Result<Vec<TimeOfDay>> {
    let bookings = fetch(source, day)?;
    compute_start_slots(day, &bookings, options)
}

/// Fetch the day's bookings from `source`, then compute end options for `start`.
///
/// # Errors
/// Returns `SlotError::Fetch` if the source fails, or any error of
/// [`compute_end_options`].
pub fn available_end_options<S: BookingSource>(
    source: &S,
    day: NaiveDate,
    start: TimeOfDay,
    options: &SlotOptions,
) -> Result<Vec<TimeOfDay>> {
    let bookings = fetch(source, day)?;
    compute_end_options(day, &bookings, start, options)
}
