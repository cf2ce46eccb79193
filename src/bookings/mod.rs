//! Booking snapshots, advisory eligibility rules and dashboard views.

pub mod eligibility;
pub mod models;
pub mod routes;
pub mod views;

pub use eligibility::{available_actions, can_approve, can_cancel, can_complete, can_reject, Eligibility};
pub use models::{Booking, BookingAction, BookingRequest, BookingStatus};
pub use routes::router;
pub use views::StatusFilter;
