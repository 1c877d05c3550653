//! # slot-engine
//!
//! Deterministic appointment availability for a field-service scheduler.
//!
//! Given the bookings already on a calendar day, the engine answers two
//! questions an admin asks while scheduling a job: "when can a job of this
//! length start?" and "having picked a start, when can it end?". It also
//! carries the small pieces of business arithmetic that sit next to the
//! calendar: booking status lifecycle, service statistics, and quote to
//! invoice conversion.
//!
//! Everything here is pure. Bookings are fetched by the caller (or through a
//! [`source::BookingSource`]) and passed in as an immutable snapshot.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` value type, `"HH:MM"` parsing and formatting
//! - [`booking`] — Booking records and the status lifecycle
//! - [`conflict`] — Interval overlap predicate and conflict lookup
//! - [`slots`] — Start-slot and end-option computation
//! - [`source`] — Data-access seam for fetching a day's bookings
//! - [`stats`] — Service statistics over dated bookings
//! - [`billing`] — Quote totals, document numbering, quote → invoice
//! - [`error`] — Error types

pub mod billing;
pub mod booking;
pub mod conflict;
pub mod error;
pub mod slots;
pub mod source;
pub mod stats;
pub mod time;

pub use booking::{Booking, BookingStatus, DatedBooking};
pub use conflict::{find_conflicts, intervals_overlap};
pub use error::SlotError;
pub use slots::{compute_end_options, compute_start_slots, SlotOptions};
pub use source::{available_end_options, available_start_slots, BookingSource, InMemoryBookings};
pub use time::{format_hhmm, to_instant, TimeOfDay};
