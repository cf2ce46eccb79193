//! EasyVehicleRental pricing, booking eligibility and earnings engine.
//!
//! The pure rules live in [`pricing`], [`bookings`] and [`earnings`]; the
//! typed REST client for the marketplace backend lives in [`client`], and
//! [`reports`] shapes earnings statements, listings and rental agreements.
//! [`app_router`] exposes the engine over HTTP/JSON.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod bookings;
pub mod client;
pub mod config;
pub mod earnings;
pub mod error;
pub mod models;
pub mod pricing;
pub mod reports;

use config::Config;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}

/// Build the full service router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .merge(bookings::router())
        .merge(earnings::router())
        .merge(reports::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
