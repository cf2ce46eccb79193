//! Earnings route handlers

use axum::{extract::State, routing::post, Json, Router};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::bookings::Booking;
use crate::error::Result;
use crate::pricing::responses::MoneyResponse;
use crate::AppState;

use super::aggregator::summarize;
use super::monthly::monthly_buckets;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub booking_count: usize,
    pub completed_count: usize,
    pub total_earnings: MoneyResponse,
    pub average_booking_value: MoneyResponse,
    pub platform_revenue: MoneyResponse,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyRequest {
    pub bookings: Vec<Booking>,
    /// Calendar year to bucket; defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MonthlyBucketResponse {
    pub month: u32,
    pub label: String,
    pub transactions: usize,
    pub revenue: MoneyResponse,
}

#[derive(Debug, Serialize)]
pub struct MonthlyResponse {
    pub year: i32,
    pub months: Vec<MonthlyBucketResponse>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/earnings/summary", post(summary))
        .route("/api/earnings/monthly", post(monthly))
}

async fn summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = summarize(&request.bookings)?;
    let currency = state.currency();

    tracing::debug!(
        "Summarized {} bookings ({} completed)",
        summary.booking_count,
        summary.completed_count
    );

    Ok(Json(SummaryResponse {
        booking_count: summary.booking_count,
        completed_count: summary.completed_count,
        total_earnings: MoneyResponse::rounded(summary.total_earnings, currency),
        average_booking_value: MoneyResponse::rounded(summary.average_booking_value, currency),
        platform_revenue: MoneyResponse::rounded(summary.platform_revenue, currency),
    }))
}

async fn monthly(
    State(state): State<AppState>,
    Json(request): Json<MonthlyRequest>,
) -> Result<Json<MonthlyResponse>> {
    let year = request.year.unwrap_or_else(|| Utc::now().year());
    let currency = state.currency();

    let months = monthly_buckets(&request.bookings, year)?
        .into_iter()
        .map(|bucket| MonthlyBucketResponse {
            month: bucket.month,
            label: bucket.label,
            transactions: bucket.transactions,
            revenue: MoneyResponse::rounded(bucket.revenue, currency),
        })
        .collect();

    Ok(Json(MonthlyResponse { year, months }))
}
