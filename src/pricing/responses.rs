//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::round_money;
use super::models::{InverseBreakdown, PriceBreakdown};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Display value, rounded to cents
    pub fn rounded(amount: Decimal, currency: &str) -> Self {
        Self {
            amount: round_money(amount, 2),
            currency: currency.to_string(),
        }
    }
}

/// Response for a rental quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub days: i64,
    pub base_amount: MoneyResponse,
    pub service_charge: MoneyResponse,
    pub vat: MoneyResponse,
    pub total: MoneyResponse,
}

impl QuoteResponse {
    pub fn from_breakdown(breakdown: &PriceBreakdown, currency: &str) -> Self {
        Self {
            days: breakdown.days,
            base_amount: MoneyResponse::rounded(breakdown.base_amount, currency),
            service_charge: MoneyResponse::rounded(breakdown.service_charge, currency),
            vat: MoneyResponse::rounded(breakdown.vat, currency),
            total: MoneyResponse::rounded(breakdown.total, currency),
        }
    }
}

/// Response for total decomposition
#[derive(Debug, Serialize)]
pub struct DecompositionResponse {
    pub base_amount: MoneyResponse,
    pub service_charge: MoneyResponse,
    pub owner_earnings: MoneyResponse,
}

impl DecompositionResponse {
    pub fn from_inverse(inverse: &InverseBreakdown, currency: &str) -> Self {
        Self {
            base_amount: MoneyResponse::rounded(inverse.base_amount, currency),
            service_charge: MoneyResponse::rounded(inverse.service_charge, currency),
            owner_earnings: MoneyResponse::rounded(inverse.owner_earnings, currency),
        }
    }
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
