//! Renter reviews

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::bookings::{Booking, BookingStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub id: Option<i64>,
    pub rating: i32,
    pub comment: String,
    pub created_date: Option<NaiveDateTime>,
    pub vehicle_id: Option<i64>,
    pub vehicle_name: Option<String>,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub booking_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub vehicle_id: i64,
    pub booking_id: i64,
    pub rating: i32,
    pub comment: String,
}

/// A completed booking not yet reviewed may be reviewed
pub fn can_review(booking: &Booking, reviewed_booking_ids: &[i64]) -> bool {
    match booking.id {
        Some(id) => {
            booking.has_status(BookingStatus::Completed) && !reviewed_booking_ids.contains(&id)
        }
        None => false,
    }
}

/// Booking ids already covered by a review
pub fn reviewed_booking_ids(reviews: &[Review]) -> Vec<i64> {
    reviews.iter().filter_map(|r| r.booking_id).collect()
}
