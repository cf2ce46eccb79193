//! Calendar-month buckets for admin charts.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bookings::Booking;
use crate::pricing::calculators::checked_add;
use crate::pricing::{compute_inverse, PricingError};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Activity within one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    /// 1-based month number
    pub month: u32,
    pub label: String,
    /// Bookings made in the month, any status
    pub transactions: usize,
    /// Service charge from bookings made in the month that are now completed
    pub revenue: Decimal,
}

/// Twelve buckets for `year`, keyed on each booking's `booking_date`.
///
/// Months without bookings report zero. Bookings without a booking date, or
/// made in another year, are ignored.
pub fn monthly_buckets(bookings: &[Booking], year: i32) -> Result<Vec<MonthlyBucket>, PricingError> {
    let mut buckets: Vec<MonthlyBucket> = MONTH_LABELS
        .iter()
        .zip(1u32..)
        .map(|(label, month)| MonthlyBucket {
            month,
            label: label.to_string(),
            transactions: 0,
            revenue: Decimal::ZERO,
        })
        .collect();

    for booking in bookings {
        let Some(made) = booking.booking_date else {
            continue;
        };
        if made.year() != year {
            continue;
        }

        let bucket = &mut buckets[made.month0() as usize];
        bucket.transactions += 1;
        if booking.is_completed() {
            let charge = compute_inverse(booking.total_amount).service_charge;
            bucket.revenue = checked_add(bucket.revenue, charge)?;
        }
    }

    Ok(buckets)
}
