//! Pricing engine module for rentals.
//!
//! Derives the renter-facing price breakdown from a per-day rate and a date
//! range, and decomposes a booked total back into owner and platform shares.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{
    compute_forward, compute_inverse, parse_booking_date, rental_days, round_money,
    start_of_day, SERVICE_CHARGE_RATE, VAT_RATE,
};
pub use models::{DateRange, InverseBreakdown, PriceBreakdown, PricingError};
pub use routes::router;
