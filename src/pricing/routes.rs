//! Pricing route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::{compute_forward, compute_inverse, parse_booking_date};
use super::requests::{DecomposeRequest, QuoteRequest};
use super::responses::{DecompositionResponse, QuoteResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/decompose", post(decompose))
}

/// Quote a rental from its per-day rate and raw form dates
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    if request.price_per_day.is_sign_negative() {
        return Err(AppError::BadRequest(
            "price_per_day must not be negative".to_string(),
        ));
    }

    let start = request.start_date.as_deref().and_then(parse_booking_date);
    let end = request.end_date.as_deref().and_then(parse_booking_date);
    if start.is_none() || end.is_none() {
        tracing::debug!(
            "Quote with incomplete dates ({:?} -> {:?}), pricing as zero days",
            request.start_date,
            request.end_date
        );
    }

    let breakdown = compute_forward(request.price_per_day, start, end)?;
    tracing::debug!(
        "Quoted {} days at {}/day: total {}",
        breakdown.days,
        request.price_per_day,
        breakdown.total
    );

    Ok(Json(QuoteResponse::from_breakdown(&breakdown, state.currency())))
}

/// Split a booked total into base amount, service charge and owner earnings
async fn decompose(
    State(state): State<AppState>,
    Json(request): Json<DecomposeRequest>,
) -> Result<Json<DecompositionResponse>> {
    if request.total_amount.is_sign_negative() {
        return Err(AppError::BadRequest(
            "total_amount must not be negative".to_string(),
        ));
    }

    let inverse = compute_inverse(request.total_amount);
    Ok(Json(DecompositionResponse::from_inverse(&inverse, state.currency())))
}
