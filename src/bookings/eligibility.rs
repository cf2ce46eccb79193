//! Advisory eligibility rules for booking actions.
//!
//! These predicates only decide which affordances to offer. The backend is
//! the authority; a refused request surfaces as
//! [`ClientError::TransitionRejected`](crate::client::ClientError::TransitionRejected).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pricing::start_of_day;

use super::models::{Booking, BookingAction, BookingStatus};

/// True for a confirmed booking, or an active one whose start is still ahead
pub fn can_cancel(booking: &Booking, now: DateTime<Utc>) -> bool {
    let (Some(status), Some(start_date)) = (booking.status, booking.start_date) else {
        return false;
    };

    match status {
        BookingStatus::Confirmed => true,
        BookingStatus::Active => start_of_day(start_date) > now,
        _ => false,
    }
}

/// True for an active booking whose end date has been reached
pub fn can_complete(booking: &Booking, now: DateTime<Utc>) -> bool {
    let (Some(status), Some(end_date)) = (booking.status, booking.end_date) else {
        return false;
    };

    status == BookingStatus::Active && start_of_day(end_date) <= now
}

/// Owner may approve a booking still awaiting a decision
pub fn can_approve(booking: &Booking) -> bool {
    booking.has_status(BookingStatus::Pending)
}

/// Owner may reject a booking still awaiting a decision
pub fn can_reject(booking: &Booking) -> bool {
    booking.has_status(BookingStatus::Pending)
}

/// All advisory flags for one booking at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub can_approve: bool,
    pub can_reject: bool,
    pub can_cancel: bool,
    pub can_complete: bool,
}

impl Eligibility {
    pub fn evaluate(booking: &Booking, now: DateTime<Utc>) -> Self {
        Self {
            can_approve: can_approve(booking),
            can_reject: can_reject(booking),
            can_cancel: can_cancel(booking, now),
            can_complete: can_complete(booking, now),
        }
    }

    pub fn actions(&self) -> Vec<BookingAction> {
        [
            (self.can_approve, BookingAction::Approve),
            (self.can_reject, BookingAction::Reject),
            (self.can_cancel, BookingAction::Cancel),
            (self.can_complete, BookingAction::Complete),
        ]
        .into_iter()
        .filter_map(|(allowed, action)| allowed.then_some(action))
        .collect()
    }
}

/// Actions worth offering for `booking` at `now`
pub fn available_actions(booking: &Booking, now: DateTime<Utc>) -> Vec<BookingAction> {
    Eligibility::evaluate(booking, now).actions()
}
