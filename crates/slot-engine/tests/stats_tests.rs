//! Tests for service statistics.

use chrono::NaiveDate;
use slot_engine::booking::{Booking, BookingStatus, DatedBooking};
use slot_engine::stats::{start_of_month, start_of_week, ServiceStatistics};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(on: NaiveDate, status: BookingStatus) -> DatedBooking {
    DatedBooking {
        date: on,
        booking: Booking::new("09:00", "11:00", status).unwrap(),
    }
}

#[test]
fn week_starts_on_sunday() {
    // 2026-03-18 is a Wednesday
    assert_eq!(start_of_week(date(2026, 3, 18)), date(2026, 3, 15));
    // A Sunday is its own week start
    assert_eq!(start_of_week(date(2026, 3, 15)), date(2026, 3, 15));
    // Crossing a month boundary
    assert_eq!(start_of_week(date(2026, 4, 2)), date(2026, 3, 29));
}

#[test]
fn month_starts_on_the_first() {
    assert_eq!(start_of_month(date(2026, 3, 18)), date(2026, 3, 1));
    assert_eq!(start_of_month(date(2026, 3, 1)), date(2026, 3, 1));
}

#[test]
fn counts_by_status_and_period() {
    let today = date(2026, 3, 18);
    let services = vec![
        service(date(2026, 3, 16), BookingStatus::Scheduled),
        service(date(2026, 3, 17), BookingStatus::Confirmed),
        service(date(2026, 3, 10), BookingStatus::Completed),
        service(date(2026, 2, 20), BookingStatus::Cancelled),
        service(date(2026, 3, 25), BookingStatus::InProgress),
        service(date(2026, 3, 14), BookingStatus::Rescheduled),
    ];

    let stats = ServiceStatistics::compute(&services, today);

    assert_eq!(
        stats,
        ServiceStatistics {
            total: 6,
            scheduled: 2,
            completed: 1,
            cancelled: 1,
            this_week: 3,
            this_month: 5,
        }
    );
}

#[test]
fn empty_input_is_all_zero() {
    let stats = ServiceStatistics::compute(&[], date(2026, 3, 18));
    assert_eq!(stats, ServiceStatistics::default());
}
