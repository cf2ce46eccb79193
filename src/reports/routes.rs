//! Report route handlers

use axum::{extract::State, routing::post, Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::bookings::Booking;
use crate::error::{AppError, Result};
use crate::models::{User, Vehicle};
use crate::AppState;

use super::agreement::RentalAgreement;
use super::earnings::EarningsReport;
use super::listing::{ListingReport, ReportKind};

#[derive(Debug, Deserialize)]
pub struct EarningsReportRequest {
    pub vehicle: Vehicle,
    pub bookings: Vec<Booking>,
    /// Report date; defaults to today (UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Only the list matching `kind` is read
#[derive(Debug, Deserialize)]
pub struct ListingReportRequest {
    pub kind: ReportKind,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AgreementRequest {
    pub booking: Booking,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reports/earnings", post(earnings_report))
        .route("/api/reports/listing", post(listing_report))
        .route("/api/reports/agreement", post(agreement))
}

fn report_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

async fn earnings_report(Json(request): Json<EarningsReportRequest>) -> Result<Json<EarningsReport>> {
    let report = EarningsReport::build(&request.vehicle, &request.bookings, report_date(request.date))?;

    tracing::debug!(
        "Earnings report for '{}': {} completed bookings",
        report.vehicle_name,
        report.bookings_count
    );

    Ok(Json(report))
}

async fn listing_report(
    State(state): State<AppState>,
    Json(request): Json<ListingReportRequest>,
) -> Result<Json<ListingReport>> {
    let date = report_date(request.date);
    let report = match request.kind {
        ReportKind::Vehicles => ListingReport::vehicles(&request.vehicles, state.currency(), date),
        ReportKind::Bookings => ListingReport::bookings(&request.bookings, state.currency(), date),
        ReportKind::Users => ListingReport::users(&request.users, date),
    };

    tracing::debug!("{} report with {} rows", report.kind, report.rows.len());

    Ok(Json(report))
}

async fn agreement(
    State(state): State<AppState>,
    Json(request): Json<AgreementRequest>,
) -> Result<Json<RentalAgreement>> {
    RentalAgreement::from_booking(&request.booking, state.currency(), report_date(request.date))
        .map(Json)
        .ok_or_else(|| AppError::BadRequest("Booking has no id".to_string()))
}
