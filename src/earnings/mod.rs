//! Owner earnings and platform revenue derived from completed bookings.

pub mod aggregator;
pub mod monthly;
pub mod routes;

pub use aggregator::{average_booking_value, platform_revenue, summarize, total_earnings, EarningsSummary};
pub use monthly::{monthly_buckets, MonthlyBucket};
pub use routes::router;
