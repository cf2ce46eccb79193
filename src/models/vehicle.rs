//! Vehicle listings, search parameters and upload requests

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{compute_forward, PriceBreakdown, PricingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Suv,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "CAR",
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Truck => "TRUCK",
            VehicleType::Suv => "SUV",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type '{0}'")]
pub struct UnknownVehicleType(pub String);

impl FromStr for VehicleType {
    type Err = UnknownVehicleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CAR" => Ok(VehicleType::Car),
            "MOTORCYCLE" => Ok(VehicleType::Motorcycle),
            "TRUCK" => Ok(VehicleType::Truck),
            "SUV" => Ok(VehicleType::Suv),
            _ => Err(UnknownVehicleType(s.to_string())),
        }
    }
}

/// Vehicle as listed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub price_per_day: Decimal,
    pub location: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub available: bool,
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub created_date: Option<NaiveDateTime>,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
}

impl Vehicle {
    /// Price a rental of this vehicle
    pub fn quote(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<PriceBreakdown, PricingError> {
        compute_forward(self.price_per_day, start, end)
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == Some(user_id)
    }
}

pub fn count_available(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|v| v.available).count()
}

/// Vehicle metadata sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    pub location: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Split a comma separated features field, dropping blanks
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// An image file to upload alongside vehicle metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Create or update request, with or without new image files.
///
/// `MetadataOnly` travels as plain JSON where the backend allows it;
/// `WithAttachments` is a multipart form holding the metadata as a JSON part
/// next to one binary part per image.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleUpload {
    MetadataOnly(VehicleDraft),
    WithAttachments {
        vehicle: VehicleDraft,
        attachments: Vec<ImageAttachment>,
    },
}

impl VehicleUpload {
    /// Pick the variant from the files the user selected
    pub fn new(vehicle: VehicleDraft, attachments: Vec<ImageAttachment>) -> Self {
        if attachments.is_empty() {
            VehicleUpload::MetadataOnly(vehicle)
        } else {
            VehicleUpload::WithAttachments {
                vehicle,
                attachments,
            }
        }
    }

    pub fn vehicle(&self) -> &VehicleDraft {
        match self {
            VehicleUpload::MetadataOnly(vehicle) => vehicle,
            VehicleUpload::WithAttachments { vehicle, .. } => vehicle,
        }
    }

    pub fn attachments(&self) -> &[ImageAttachment] {
        match self {
            VehicleUpload::MetadataOnly(_) => &[],
            VehicleUpload::WithAttachments { attachments, .. } => attachments,
        }
    }
}

/// Browse/search parameters from the vehicle list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleQuery {
    pub query: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl VehicleQuery {
    /// Any active filter switches the list from paginated browsing to search
    pub fn is_search(&self) -> bool {
        !self.params().is_empty()
    }

    /// Search query string pairs; blank text and zero prices are omitted
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            params.push(("query", query.to_string()));
        }
        if let Some(vehicle_type) = self.vehicle_type {
            params.push(("type", vehicle_type.as_str().to_string()));
        }
        if let Some(min) = self.min_price.filter(|p| !p.is_zero()) {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price.filter(|p| !p.is_zero()) {
            params.push(("maxPrice", max.to_string()));
        }
        params
    }
}
