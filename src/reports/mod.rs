//! Report contents for earnings statements, admin listings and rental
//! agreements. Rendering to a document format is left to the caller.

pub mod agreement;
pub mod earnings;
pub mod listing;
pub mod routes;

pub use agreement::{agreement_file_name, RentalAgreement, AGREEMENT_TERMS};
pub use earnings::{earnings_file_name, EarningsReport, EarningsRow};
pub use listing::{listing_file_name, ListingReport, ReportKind};
pub use routes::router;
