//! Booking snapshots as returned by the marketplace backend.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{compute_forward, DateRange, PriceBreakdown, PricingError};

/// Booking lifecycle status.
///
/// The client never enforces a state machine; transitions are requested
/// through [`BookingAction`] and decided by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Active,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Active => "ACTIVE",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == upper)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A status change the client can ask the backend for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    /// Owner accepts a pending booking
    Approve,
    /// Owner declines a pending booking
    Reject,
    /// Renter or owner withdraws before the rental starts
    Cancel,
    /// Rental period is over
    Complete,
}

impl BookingAction {
    /// Status the backend is asked to move the booking to
    pub fn target_status(&self) -> BookingStatus {
        match self {
            BookingAction::Approve => BookingStatus::Confirmed,
            BookingAction::Reject => BookingStatus::Cancelled,
            BookingAction::Cancel => BookingStatus::Cancelled,
            BookingAction::Complete => BookingStatus::Completed,
        }
    }
}

impl fmt::Display for BookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingAction::Approve => "approve",
            BookingAction::Reject => "reject",
            BookingAction::Cancel => "cancel",
            BookingAction::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Read-only booking snapshot.
///
/// Every field is optional on the wire; the eligibility rules and
/// aggregators treat missing values as "not eligible" / "not counted".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub booking_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub terms_accepted: Option<bool>,
    #[serde(default)]
    pub agreement_url: Option<String>,
}

impl Booking {
    pub fn has_status(&self, status: BookingStatus) -> bool {
        self.status == Some(status)
    }

    pub fn is_completed(&self) -> bool {
        self.has_status(BookingStatus::Completed)
    }

    /// Rental period, when both dates are known
    pub fn period(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::from_dates(start, end)),
            _ => None,
        }
    }

    pub fn renter_label(&self) -> String {
        match (&self.user_name, self.user_id) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => format!("User {}", id),
            _ => "Unknown renter".to_string(),
        }
    }
}

/// Body for `POST /api/bookings`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub terms_accepted: bool,
}

impl BookingRequest {
    /// Build a request whose total is priced locally with the forward formula
    pub fn priced(
        vehicle_id: i64,
        price_per_day: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        terms_accepted: bool,
    ) -> Result<(Self, PriceBreakdown), PricingError> {
        let range = DateRange::from_dates(start_date, end_date);
        let breakdown = compute_forward(price_per_day, Some(range.start), Some(range.end))?;

        let request = Self {
            vehicle_id,
            start_date,
            end_date,
            total_amount: breakdown.total,
            terms_accepted,
        };
        Ok((request, breakdown))
    }
}
