//! Start-slot and end-option computation for one calendar day.
//!
//! Candidate times are enumerated on a fixed grid (`slot_minutes`) from the
//! start of business hours. Every interval is anchored on the requested day
//! and compared as an absolute instant, so nothing can spill into the next
//! day: a candidate whose end would pass `work_end` is dropped.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::booking::Booking;
use crate::conflict::intervals_overlap;
use crate::error::{Result, SlotError};
use crate::time::{to_instant, TimeOfDay};

pub const DEFAULT_SLOT_MINUTES: u32 = 30;
pub const DEFAULT_DURATION_MINUTES: u32 = 120;
pub const DEFAULT_WORK_START: TimeOfDay = TimeOfDay::at(8, 0);
pub const DEFAULT_WORK_END: TimeOfDay = TimeOfDay::at(18, 0);

/// Grid, business hours, and requested job length.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults (30-minute grid, 08:00–18:00, 120-minute jobs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotOptions {
    /// Grid step between candidate times.
    pub slot_minutes: u32,
    /// Start of business hours (inclusive).
    pub work_start: TimeOfDay,
    /// End of business hours (exclusive for starts, inclusive for ends).
    pub work_end: TimeOfDay,
    /// Continuous free time a start slot must offer. Ignored by
    /// [`compute_end_options`].
    pub duration_minutes: u32,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            work_start: DEFAULT_WORK_START,
            work_end: DEFAULT_WORK_END,
            duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl SlotOptions {
    /// Check every precondition of [`compute_start_slots`].
    ///
    /// # Errors
    /// Returns `SlotError::InvalidOptions` if the grid step or duration is
    /// zero, or business hours are empty or inverted.
    pub fn validate(&self) -> Result<()> {
        self.validate_grid()?;
        if self.duration_minutes == 0 {
            return Err(SlotError::InvalidOptions(
                "duration_minutes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_grid(&self) -> Result<()> {
        if self.slot_minutes == 0 {
            return Err(SlotError::InvalidOptions(
                "slot_minutes must be greater than zero".to_string(),
            ));
        }
        if self.work_start >= self.work_end {
            return Err(SlotError::InvalidOptions(format!(
                "work_start {} must be before work_end {}",
                self.work_start, self.work_end
            )));
        }
        Ok(())
    }

    fn step(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_minutes))
    }
}

/// Anchor every blocking booking on `day` as an absolute `[start, end)` pair.
fn blocking_intervals(day: NaiveDate, bookings: &[Booking]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    bookings
        .iter()
        .filter(|b| b.is_blocking())
        .map(|b| (to_instant(day, b.start), to_instant(day, b.end)))
        .collect()
}

/// Compute every grid time at which a job of `duration_minutes` can start.
///
/// A candidate `t` survives iff `t + duration <= work_end` and
/// `[t, t + duration)` overlaps no blocking booking. Touching a booking's
/// edge is allowed. Results are ascending; an empty list means the day has no
/// room for a job of that length.
///
/// # Errors
/// Returns `SlotError::InvalidOptions` if `options` fails
/// [`SlotOptions::validate`].
pub fn compute_start_slots(
    day: NaiveDate,
    bookings: &[Booking],
    options: &SlotOptions,
) -> Result<Vec<TimeOfDay>> {
    options.validate()?;

    let busy = blocking_intervals(day, bookings);
    let day_start = to_instant(day, options.work_start);
    let day_end = to_instant(day, options.work_end);
    let step = options.step();
    let length = Duration::minutes(i64::from(options.duration_minutes));

    let mut slots = Vec::new();
    let mut candidate = day_start;
    while candidate < day_end {
        let candidate_end = candidate + length;
        if candidate_end <= day_end
            && !busy
                .iter()
                .any(|&(b_start, b_end)| intervals_overlap(candidate, candidate_end, b_start, b_end))
        {
            slots.push(TimeOfDay::from_instant(candidate));
        }
        candidate += step;
    }

    trace!(%day, blocking = busy.len(), slots = slots.len(), "computed start slots");
    Ok(slots)
}

/// Compute the grid times at which a job starting at `start` can end.
///
/// The job may run until the earliest blocking booking that starts after
/// `start`, or `work_end` if none does. Ends are enumerated strictly after
/// `start` up to and including that limit. If `start` already falls inside a
/// blocking booking the result is empty.
///
/// `start` is not required to lie on the grid or inside business hours; a
/// start at or after `work_end` simply yields no ends.
///
/// # Errors
/// Returns `SlotError::InvalidOptions` if the grid step is zero or business
/// hours are empty. `duration_minutes` is not consulted.
pub fn compute_end_options(
    day: NaiveDate,
    bookings: &[Booking],
    start: TimeOfDay,
    options: &SlotOptions,
) -> Result<Vec<TimeOfDay>> {
    options.validate_grid()?;

    let start_at = to_instant(day, start);
    let mut free_until = to_instant(day, options.work_end);

    for (b_start, b_end) in blocking_intervals(day, bookings) {
        if b_start > start_at && b_start < free_until {
            free_until = b_start;
        }
        if b_start <= start_at && b_end > start_at {
            free_until = start_at;
            break;
        }
    }

    if free_until <= start_at {
        trace!(%day, %start, "start is blocked or past business hours");
        return Ok(Vec::new());
    }

    let step = options.step();
    let mut ends = Vec::new();
    let mut candidate = start_at + step;
    while candidate <= free_until {
        ends.push(TimeOfDay::from_instant(candidate));
        candidate += step;
    }

    trace!(%day, %start, ends = ends.len(), "computed end options");
    Ok(ends)
}
