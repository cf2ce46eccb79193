//! Core pricing calculation functions.
//!
//! Pure functions for rental pricing math - no network access.
//! Every amount is a `Decimal`; nothing here rounds except [`round_money`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{InverseBreakdown, PriceBreakdown, PricingError};

/// Platform service charge on the base amount (5%)
pub const SERVICE_CHARGE_RATE: Decimal = dec!(0.05);

/// VAT on base amount plus service charge (18%)
pub const VAT_RATE: Decimal = dec!(0.18);

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Used only when presenting amounts; the calculators keep full precision so
/// that [`compute_inverse`] stays exact for totals produced by [`compute_forward`].
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use easyrental::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// UTC midnight of a calendar date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Number of rental days between two instants.
///
/// `ceil(|end - start| / 1 day)`. A missing bound yields 0, which in turn
/// produces an all-zero breakdown rather than an error.
pub fn rental_days(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => {
            let millis = (end - start).num_milliseconds().abs();
            (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
        }
        _ => 0,
    }
}

/// Parse a date as typed into a booking form or sent by the backend.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` (taken as UTC) and
/// plain `YYYY-MM-DD` (UTC midnight). Anything else is `None`.
pub fn parse_booking_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// Price a rental from its per-day rate and period.
///
/// ```text
/// base    = days * price_per_day
/// service = base * 0.05
/// vat     = (base + service) * 0.18
/// total   = base + service + vat
/// ```
///
/// Fails only when an intermediate amount no longer fits in a `Decimal`.
pub fn compute_forward(
    price_per_day: Decimal,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<PriceBreakdown, PricingError> {
    let days = rental_days(start, end);
    if days == 0 {
        return Ok(PriceBreakdown::zero());
    }

    let base_amount = checked_mul(Decimal::from(days), price_per_day)?;
    let service_charge = checked_mul(base_amount, SERVICE_CHARGE_RATE)?;
    let taxable = checked_add(base_amount, service_charge)?;
    let vat = checked_mul(taxable, VAT_RATE)?;
    let total = checked_add(taxable, vat)?;

    Ok(PriceBreakdown {
        days,
        base_amount,
        service_charge,
        vat,
        total,
    })
}

pub(crate) fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_add(b).ok_or(PricingError::Overflow)
}

fn checked_mul(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_mul(b).ok_or(PricingError::Overflow)
}

/// Decompose a booked total into base amount and service charge.
///
/// Strips VAT, then the service charge. Exact only when `total_amount` was
/// produced by [`compute_forward`]; for anything else it is a best-effort split.
pub fn compute_inverse(total_amount: Decimal) -> InverseBreakdown {
    let base_amount = total_amount / (Decimal::ONE + VAT_RATE) / (Decimal::ONE + SERVICE_CHARGE_RATE);
    let service_charge = base_amount * SERVICE_CHARGE_RATE;

    InverseBreakdown {
        base_amount,
        service_charge,
        owner_earnings: base_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::DateRange;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(999999.995), 2), dec!(1000000.00));
    }

    // ==================== rental_days tests ====================

    #[test]
    fn test_rental_days_whole_days() {
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 4)), 3);
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_rental_days_partial_day_rounds_up() {
        let start = date(2024, 1, 1).unwrap();
        let end = start + Duration::hours(25);
        assert_eq!(rental_days(Some(start), Some(end)), 2);

        let end = start + Duration::milliseconds(1);
        assert_eq!(rental_days(Some(start), Some(end)), 1);
    }

    #[test]
    fn test_rental_days_reversed_range_uses_absolute_difference() {
        assert_eq!(rental_days(date(2024, 1, 4), date(2024, 1, 1)), 3);
    }

    #[test]
    fn test_rental_days_missing_bound_is_zero() {
        assert_eq!(rental_days(None, date(2024, 1, 4)), 0);
        assert_eq!(rental_days(date(2024, 1, 1), None), 0);
        assert_eq!(rental_days(None, None), 0);
    }

    #[test]
    fn test_rental_days_across_month_and_leap_day() {
        assert_eq!(rental_days(date(2024, 2, 27), date(2024, 3, 2)), 4);
    }

    // ==================== parse_booking_date tests ====================

    #[test]
    fn test_parse_booking_date_formats() {
        assert_eq!(parse_booking_date("2024-01-04"), date(2024, 1, 4));
        assert_eq!(parse_booking_date(" 2024-01-04 "), date(2024, 1, 4));
        assert_eq!(
            parse_booking_date("2024-01-04T10:30:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 4, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_booking_date("2024-01-04T10:30"),
            Some(Utc.with_ymd_and_hms(2024, 1, 4, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_booking_date("2024-01-04T10:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 4, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_booking_date_invalid() {
        assert_eq!(parse_booking_date(""), None);
        assert_eq!(parse_booking_date("not a date"), None);
        assert_eq!(parse_booking_date("2024-13-40"), None);
    }

    // ==================== compute_forward tests ====================

    #[test]
    fn test_compute_forward_three_day_rental() {
        let breakdown = compute_forward(dec!(1000), date(2024, 1, 1), date(2024, 1, 4)).unwrap();

        assert_eq!(breakdown.days, 3);
        assert_eq!(breakdown.base_amount, dec!(3000));
        assert_eq!(breakdown.service_charge, dec!(150));
        assert_eq!(breakdown.vat, dec!(567));
        assert_eq!(breakdown.total, dec!(3717));
    }

    #[test]
    fn test_compute_forward_missing_dates_is_all_zero() {
        assert_eq!(compute_forward(dec!(1000), None, date(2024, 1, 4)), Ok(PriceBreakdown::zero()));
        assert_eq!(
            compute_forward(dec!(1000), parse_booking_date("garbage"), date(2024, 1, 4)),
            Ok(PriceBreakdown::zero())
        );
    }

    #[test]
    fn test_compute_forward_same_day_is_zero() {
        let breakdown = compute_forward(dec!(1000), date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(breakdown.total, dec!(0));
    }

    #[test]
    fn test_compute_forward_monotonic_in_days_and_price() {
        let start = date(2024, 1, 1).unwrap();
        let prices = [dec!(0), dec!(1), dec!(49.99), dec!(1000), dec!(12500.5)];

        for price in prices {
            let mut previous = Decimal::ZERO;
            for days in 0..40 {
                let end = start + Duration::days(days);
                let total = compute_forward(price, Some(start), Some(end)).unwrap().total;
                assert!(total >= previous, "total fell at {} days for {}", days, price);
                previous = total;
            }
        }

        let end = start + Duration::days(7);
        let mut previous = Decimal::ZERO;
        for price in prices {
            let total = compute_forward(price, Some(start), Some(end)).unwrap().total;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn test_compute_forward_overflow_is_an_error() {
        assert_eq!(
            compute_forward(dec!(50000000000000000000000000000), date(2024, 1, 1), date(2024, 1, 3)),
            Err(PricingError::Overflow)
        );
        assert_eq!(
            compute_forward(Decimal::MAX, date(2024, 1, 1), date(2024, 1, 2)),
            Err(PricingError::Overflow)
        );
        // Zero days never multiplies, whatever the rate
        assert_eq!(
            compute_forward(Decimal::MAX, date(2024, 1, 1), None),
            Ok(PriceBreakdown::zero())
        );
    }

    #[test]
    fn test_compute_inverse_of_max_total() {
        let inverse = compute_inverse(Decimal::MAX);
        assert!(inverse.base_amount < Decimal::MAX);
        assert_eq!(inverse.owner_earnings, inverse.base_amount);
    }

    #[test]
    fn test_date_range_days_matches_forward() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        );
        assert_eq!(range.days(), 3);
    }

    // ==================== compute_inverse tests ====================

    #[test]
    fn test_compute_inverse_known_total() {
        let inverse = compute_inverse(dec!(3717));
        assert_eq!(round_money(inverse.base_amount, 2), dec!(3000));
        assert_eq!(round_money(inverse.service_charge, 2), dec!(150));
        assert_eq!(inverse.owner_earnings, inverse.base_amount);
    }

    #[test]
    fn test_compute_inverse_round_trips_forward_total() {
        let cases = [
            (dec!(1000), 3),
            (dec!(1234.57), 5),
            (dec!(89.90), 1),
            (dec!(45000), 14),
        ];

        for (price, days) in cases {
            let start = date(2024, 3, 1).unwrap();
            let end = start + Duration::days(days);
            let forward = compute_forward(price, Some(start), Some(end)).unwrap();
            let inverse = compute_inverse(forward.total);

            let drift = (inverse.base_amount - forward.base_amount).abs();
            assert!(drift < dec!(0.000001), "drift {} for {} x {}", drift, price, days);
        }
    }

    #[test]
    fn test_compute_inverse_of_rounded_total_stays_within_a_cent() {
        let start = date(2024, 3, 1).unwrap();
        let end = start + Duration::days(5);
        let forward = compute_forward(dec!(1234.57), Some(start), Some(end)).unwrap();

        let stored_total = round_money(forward.total, 2);
        let inverse = compute_inverse(stored_total);

        assert!((inverse.base_amount - forward.base_amount).abs() < dec!(0.01));
    }

    #[test]
    fn test_compute_inverse_zero() {
        let inverse = compute_inverse(Decimal::ZERO);
        assert_eq!(inverse.base_amount, dec!(0));
        assert_eq!(inverse.service_charge, dec!(0));
    }
}
