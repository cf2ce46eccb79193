//! Value types produced by the pricing calculators.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{rental_days, start_of_day};

/// A rental period between two instants.
///
/// `end >= start` is expected but not enforced; the duration uses the
/// absolute difference, so a reversed range prices the same as the forward one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Range between two calendar dates, each taken at UTC midnight
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: start_of_day(end),
        }
    }

    /// Whole rental days covered, rounding any partial day up
    pub fn days(&self) -> i64 {
        rental_days(Some(self.start), Some(self.end))
    }
}

/// Renter-facing price breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub days: i64,
    pub base_amount: Decimal,
    pub service_charge: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn zero() -> Self {
        Self {
            days: 0,
            base_amount: Decimal::ZERO,
            service_charge: Decimal::ZERO,
            vat: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Amount too large for `Decimal` arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("amount is too large to price")]
    Overflow,
}

/// Split of a booked total into the owner's and the platform's share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InverseBreakdown {
    pub base_amount: Decimal,
    pub service_charge: Decimal,
    /// The owner receives the base amount; the service charge is platform revenue
    pub owner_earnings: Decimal,
}
