//! Folds booking snapshots into owner earnings and platform revenue.
//!
//! Only `COMPLETED` bookings count. Each total is decomposed with
//! [`compute_inverse`]; the owner keeps the base amount and the platform
//! keeps the service charge. Sums fail with [`PricingError::Overflow`]
//! instead of wrapping or panicking.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::bookings::Booking;
use crate::pricing::calculators::checked_add;
use crate::pricing::{compute_inverse, InverseBreakdown, PricingError};

pub fn completed(bookings: &[Booking]) -> impl Iterator<Item = &Booking> {
    bookings.iter().filter(|b| b.is_completed())
}

fn sum_completed(
    bookings: &[Booking],
    share: impl Fn(&InverseBreakdown) -> Decimal,
) -> Result<Decimal, PricingError> {
    completed(bookings).try_fold(Decimal::ZERO, |acc, b| {
        checked_add(acc, share(&compute_inverse(b.total_amount)))
    })
}

pub fn total_earnings(bookings: &[Booking]) -> Result<Decimal, PricingError> {
    sum_completed(bookings, |split| split.owner_earnings)
}

/// Mean owner earnings per completed booking, zero when there are none
pub fn average_booking_value(bookings: &[Booking]) -> Result<Decimal, PricingError> {
    let count = completed(bookings).count();
    if count == 0 {
        return Ok(Decimal::ZERO);
    }
    Ok(total_earnings(bookings)? / Decimal::from(count))
}

pub fn platform_revenue(bookings: &[Booking]) -> Result<Decimal, PricingError> {
    sum_completed(bookings, |split| split.service_charge)
}

/// Everything an earnings dashboard shows at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsSummary {
    pub booking_count: usize,
    pub completed_count: usize,
    pub total_earnings: Decimal,
    pub average_booking_value: Decimal,
    pub platform_revenue: Decimal,
}

pub fn summarize(bookings: &[Booking]) -> Result<EarningsSummary, PricingError> {
    Ok(EarningsSummary {
        booking_count: bookings.len(),
        completed_count: completed(bookings).count(),
        total_earnings: total_earnings(bookings)?,
        average_booking_value: average_booking_value(bookings)?,
        platform_revenue: platform_revenue(bookings)?,
    })
}
