//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid slot options: {0}")]
    InvalidOptions(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// The bookings for the day could not be fetched. Availability is unknown,
    /// which is distinct from "no slots available".
    #[error("Failed to fetch bookings: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
