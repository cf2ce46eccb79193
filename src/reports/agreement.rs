//! Rental agreement contents for a single booking

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bookings::Booking;
use crate::pricing::round_money;

pub const AGREEMENT_TERMS: [&str; 5] = [
    "1. The renter agrees to return the vehicle in the same condition.",
    "2. Any damage to the vehicle will be charged to the renter.",
    "3. The vehicle must be returned on time to avoid additional charges.",
    "4. The renter must have a valid driving license.",
    "5. Insurance coverage is included in the rental fee.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    pub booking_id: i64,
    pub vehicle_name: String,
    pub renter_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub currency: String,
    pub agreement_date: NaiveDate,
    pub terms: Vec<String>,
    pub file_name: String,
}

impl RentalAgreement {
    /// `None` when the booking has not been persisted yet
    pub fn from_booking(booking: &Booking, currency: &str, agreement_date: NaiveDate) -> Option<Self> {
        let booking_id = booking.id?;

        Some(Self {
            booking_id,
            vehicle_name: booking
                .vehicle_name
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            renter_name: booking.renter_label(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            total_amount: round_money(booking.total_amount, 2),
            currency: currency.to_string(),
            agreement_date,
            terms: AGREEMENT_TERMS.iter().map(|t| t.to_string()).collect(),
            file_name: agreement_file_name(booking_id),
        })
    }
}

pub fn agreement_file_name(booking_id: i64) -> String {
    format!("rental-agreement-{}.pdf", booking_id)
}
