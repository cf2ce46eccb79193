//! Per-vehicle earnings report for owners

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bookings::{views, Booking};
use crate::earnings::{average_booking_value, total_earnings};
use crate::models::Vehicle;
use crate::pricing::{compute_inverse, round_money, PricingError};

/// One completed booking in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsRow {
    pub booking_id: Option<i64>,
    pub renter_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub base_amount: Decimal,
    pub service_charge: Decimal,
    pub owner_earnings: Decimal,
    pub completed_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsReport {
    pub vehicle_id: Option<i64>,
    pub vehicle_name: String,
    pub total_earnings: Decimal,
    pub bookings_count: usize,
    pub average_booking: Decimal,
    pub rows: Vec<EarningsRow>,
    pub file_name: String,
}

impl EarningsReport {
    /// Build from any booking list; only this vehicle's completed bookings are used
    pub fn build(
        vehicle: &Vehicle,
        bookings: &[Booking],
        generated: NaiveDate,
    ) -> Result<Self, PricingError> {
        let scoped = match vehicle.id {
            Some(id) => views::for_vehicle(bookings, id),
            None => bookings.to_vec(),
        };

        let rows: Vec<EarningsRow> = scoped
            .iter()
            .filter(|b| b.is_completed())
            .map(|booking| {
                let split = compute_inverse(booking.total_amount);
                EarningsRow {
                    booking_id: booking.id,
                    renter_name: booking.renter_label(),
                    start_date: booking.start_date,
                    end_date: booking.end_date,
                    base_amount: round_money(split.base_amount, 2),
                    service_charge: round_money(split.service_charge, 2),
                    owner_earnings: round_money(split.owner_earnings, 2),
                    completed_date: booking.booking_date,
                }
            })
            .collect();

        Ok(Self {
            vehicle_id: vehicle.id,
            vehicle_name: vehicle.name.clone(),
            total_earnings: round_money(total_earnings(&scoped)?, 2),
            bookings_count: rows.len(),
            average_booking: round_money(average_booking_value(&scoped)?, 2),
            rows,
            file_name: earnings_file_name(&vehicle.name, generated),
        })
    }
}

/// `earnings-report-{name-with-dashes}-{month}-{year}.pdf`.
///
/// Every whitespace run becomes one dash, including leading and trailing runs.
pub fn earnings_file_name(vehicle_name: &str, generated: NaiveDate) -> String {
    let mut slug = String::with_capacity(vehicle_name.len());
    let mut in_space = false;
    for c in vehicle_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }

    format!(
        "earnings-report-{}-{}-{}.pdf",
        slug,
        generated.month(),
        generated.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::BookingStatus;
    use rust_decimal_macros::dec;

    fn generated() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()
    }

    fn booking(id: i64, vehicle_id: i64, status: BookingStatus, total: Decimal) -> Booking {
        Booking {
            id: Some(id),
            vehicle_id: Some(vehicle_id),
            user_id: Some(50 + id),
            status: Some(status),
            total_amount: total,
            ..Booking::default()
        }
    }

    fn vehicle() -> Vehicle {
        Vehicle {
            id: Some(3),
            name: "Toyota  Aqua Hybrid".to_string(),
            ..Vehicle::default()
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            earnings_file_name("Toyota  Aqua Hybrid", generated()),
            "earnings-report-Toyota-Aqua-Hybrid-7-2024.pdf"
        );
        assert_eq!(
            earnings_file_name(" Aqua\t ", generated()),
            "earnings-report--Aqua--7-2024.pdf"
        );
    }

    #[test]
    fn test_report_uses_only_completed_bookings_of_vehicle() {
        let bookings = vec![
            booking(1, 3, BookingStatus::Completed, dec!(3717)),
            booking(2, 3, BookingStatus::Completed, dec!(1239)),
            booking(3, 3, BookingStatus::Active, dec!(3717)),
            booking(4, 9, BookingStatus::Completed, dec!(3717)),
        ];

        let report = EarningsReport::build(&vehicle(), &bookings, generated()).unwrap();

        assert_eq!(report.bookings_count, 2);
        assert_eq!(report.total_earnings, dec!(4000));
        assert_eq!(report.average_booking, dec!(2000));
        assert_eq!(report.rows[0].booking_id, Some(1));
        assert_eq!(report.rows[0].renter_name, "User 51");
        assert_eq!(report.rows[0].base_amount, dec!(3000));
        assert_eq!(report.rows[0].service_charge, dec!(150));
        assert_eq!(report.rows[0].owner_earnings, dec!(3000));
        assert_eq!(report.file_name, "earnings-report-Toyota-Aqua-Hybrid-7-2024.pdf");
    }

    #[test]
    fn test_report_without_completed_bookings() {
        let report = EarningsReport::build(&vehicle(), &[], generated()).unwrap();
        assert_eq!(report.bookings_count, 0);
        assert_eq!(report.total_earnings, dec!(0));
        assert_eq!(report.average_booking, dec!(0));
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_report_totals_too_large_are_errors() {
        let bookings = vec![
            booking(1, 3, BookingStatus::Completed, Decimal::MAX),
            booking(2, 3, BookingStatus::Completed, Decimal::MAX),
        ];
        assert_eq!(
            EarningsReport::build(&vehicle(), &bookings, generated()),
            Err(PricingError::Overflow)
        );
    }
}
