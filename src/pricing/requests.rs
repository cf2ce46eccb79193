//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to quote a rental
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
    /// Raw form value; blank or unparseable dates price as zero days
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request to split a booked total into owner and platform shares
#[derive(Debug, Deserialize)]
pub struct DecomposeRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
}
