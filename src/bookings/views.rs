//! In-memory filtering and ordering of booking lists for dashboards.

use std::str::FromStr;

use super::models::{Booking, BookingStatus, UnknownStatus};

/// Status filter as chosen in the booking management view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => booking.has_status(*status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

pub fn filter_by_status(bookings: &[Booking], filter: StatusFilter) -> Vec<&Booking> {
    bookings.iter().filter(|b| filter.matches(b)).collect()
}

/// Order by booking date, newest first; undated bookings go last
pub fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
}

/// The `limit` most recently made bookings
pub fn recent(bookings: &[Booking], limit: usize) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

pub fn count_with_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.has_status(status)).count()
}

/// Bookings made on one vehicle, input order kept
pub fn for_vehicle(bookings: &[Booking], vehicle_id: i64) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.vehicle_id == Some(vehicle_id))
        .cloned()
        .collect()
}

/// Bookings that are confirmed or currently running
pub fn count_in_progress(bookings: &[Booking]) -> usize {
    bookings
        .iter()
        .filter(|b| b.has_status(BookingStatus::Active) || b.has_status(BookingStatus::Confirmed))
        .count()
}
