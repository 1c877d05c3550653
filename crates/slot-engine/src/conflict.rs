//! Overlap detection between half-open intervals.
//!
//! Intervals are `[start, end)`. Adjacent intervals (one ends exactly when
//! the other starts) are NOT conflicts.

use crate::booking::Booking;
use crate::time::TimeOfDay;

/// Two intervals overlap iff `a_start < b_end && b_start < a_end`.
///
/// Works for any ordered time representation: `TimeOfDay`, minute offsets, or
/// anchored `NaiveDateTime` instants.
pub fn intervals_overlap<T: Ord>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}

/// Find the blocking bookings that overlap a proposed `[start, end)` interval.
///
/// Cancelled bookings are skipped. Intended for a write-time re-check before a
/// new booking is stored, since the slot lists handed to a user may be stale.
pub fn find_conflicts(bookings: &[Booking], start: TimeOfDay, end: TimeOfDay) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| b.is_blocking())
        .filter(|b| intervals_overlap(start, end, b.start, b.end))
        .collect()
}
