//! Typed client for the marketplace REST backend.
//!
//! One `impl BackendClient` block per resource: [`auth`], [`vehicles`],
//! [`bookings`], [`reviews`].

pub mod auth;
pub mod bookings;
pub mod error;
pub mod http;
pub mod reviews;
pub mod session;
pub mod vehicles;

pub use error::{ClientError, ClientResult};
pub use http::BackendClient;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use vehicles::DEFAULT_PAGE_SIZE;
