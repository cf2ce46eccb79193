//! Booking eligibility route handlers

use axum::{routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::AppState;

use super::eligibility::Eligibility;
use super::models::{Booking, BookingAction};

/// Request to evaluate which actions a booking currently allows
#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    pub booking: Booking,
    /// Evaluation instant; defaults to the server clock
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub booking_id: Option<i64>,
    #[serde(flatten)]
    pub eligibility: Eligibility,
    pub actions: Vec<BookingAction>,
    pub evaluated_at: DateTime<Utc>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/bookings/eligibility", post(eligibility))
}

async fn eligibility(Json(request): Json<EligibilityRequest>) -> Result<Json<EligibilityResponse>> {
    let now = request.now.unwrap_or_else(Utc::now);
    let eligibility = Eligibility::evaluate(&request.booking, now);

    tracing::debug!(
        "Eligibility for booking {:?} ({:?}): {:?}",
        request.booking.id,
        request.booking.status,
        eligibility
    );

    Ok(Json(EligibilityResponse {
        booking_id: request.booking.id,
        actions: eligibility.actions(),
        eligibility,
        evaluated_at: now,
    }))
}
