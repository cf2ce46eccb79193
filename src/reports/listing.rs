//! Admin listing reports (vehicles, bookings, users)

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::bookings::Booking;
use crate::models::{Role, User, Vehicle};
use crate::pricing::round_money;

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Vehicles,
    Bookings,
    Users,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Vehicles => "Vehicles",
            ReportKind::Bookings => "Bookings",
            ReportKind::Users => "Users",
        }
    }

    fn headers(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Vehicles => &["ID", "Name", "Type", "Price/Day", "Owner", "Status"],
            ReportKind::Bookings => &["ID", "Vehicle", "User", "Start Date", "End Date", "Amount", "Status"],
            ReportKind::Users => &["ID", "Name", "Email", "Phone", "Join Date", "Role"],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabular report ready to hand to a document renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingReport {
    pub kind: ReportKind,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub file_name: String,
}

impl ListingReport {
    fn new(kind: ReportKind, rows: Vec<Vec<String>>, generated: NaiveDate) -> Self {
        Self {
            kind,
            title: format!("{} Report - {}", kind, generated.format("%Y-%m-%d")),
            headers: kind.headers().iter().map(|h| h.to_string()).collect(),
            rows,
            file_name: listing_file_name(kind, generated),
        }
    }

    pub fn vehicles(vehicles: &[Vehicle], currency: &str, generated: NaiveDate) -> Self {
        let rows = vehicles
            .iter()
            .enumerate()
            .map(|(index, v)| {
                vec![
                    row_id(v.id, index),
                    or_missing(&v.name),
                    v.vehicle_type.map_or_else(|| MISSING.to_string(), |t| t.to_string()),
                    format!("{} {}", currency, round_money(v.price_per_day, 2)),
                    v.owner_name.as_deref().map_or_else(|| MISSING.to_string(), or_missing),
                    if v.available { "Available" } else { "Unavailable" }.to_string(),
                ]
            })
            .collect();
        Self::new(ReportKind::Vehicles, rows, generated)
    }

    pub fn bookings(bookings: &[Booking], currency: &str, generated: NaiveDate) -> Self {
        let rows = bookings
            .iter()
            .enumerate()
            .map(|(index, b)| {
                vec![
                    row_id(b.id, index),
                    b.vehicle_name.as_deref().map_or_else(|| MISSING.to_string(), or_missing),
                    b.user_name.as_deref().map_or_else(|| MISSING.to_string(), or_missing),
                    format_date(b.start_date),
                    format_date(b.end_date),
                    format!("{} {}", currency, round_money(b.total_amount, 2)),
                    b.status.map_or_else(|| MISSING.to_string(), |s| s.to_string()),
                ]
            })
            .collect();
        Self::new(ReportKind::Bookings, rows, generated)
    }

    pub fn users(users: &[User], generated: NaiveDate) -> Self {
        let rows = users
            .iter()
            .enumerate()
            .map(|(index, u)| {
                vec![
                    row_id(u.id, index),
                    or_missing(&u.name),
                    or_missing(&u.email),
                    or_missing(&u.phone),
                    format_date(u.join_date.map(|d| d.date())),
                    match u.role {
                        Role::Admin => "ADMIN",
                        Role::User => "USER",
                    }
                    .to_string(),
                ]
            })
            .collect();
        Self::new(ReportKind::Users, rows, generated)
    }
}

/// `{kind}-report-{month}-{year}.pdf`, kind lower-cased
pub fn listing_file_name(kind: ReportKind, generated: NaiveDate) -> String {
    format!(
        "{}-report-{}-{}.pdf",
        kind.as_str().to_lowercase(),
        generated.month(),
        generated.year()
    )
}

/// Record id, or its 1-based position when the record has none
fn row_id(id: Option<i64>, index: usize) -> String {
    id.map_or_else(|| (index + 1).to_string(), |id| id.to_string())
}

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string())
}
