//! Rental cost for a date range

use crate::model::{BookingCost, BookingRange};

/// Days are the ceiling of the range length; total is days times the daily
/// price. Range validation (end after start) is the caller's job.
pub fn compute_cost(range: &BookingRange, daily_price: u32) -> BookingCost {
    let days = range.duration_days();
    BookingCost {
        days,
        total: days * i64::from(daily_price),
    }
}
