//! `/api/vehicles` calls

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::models::{Page, Vehicle, VehicleQuery, VehicleUpload};

use super::error::ClientResult;
use super::http::BackendClient;

/// Page size the listing view asks for
pub const DEFAULT_PAGE_SIZE: u32 = 30;

impl BackendClient {
    pub async fn list_vehicles(&self, page: u32, size: u32) -> ClientResult<Page<Vehicle>> {
        self.send(
            self.request(Method::GET, "vehicles")
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    pub async fn get_vehicle(&self, vehicle_id: i64) -> ClientResult<Vehicle> {
        self.send(self.request(Method::GET, &format!("vehicles/{}", vehicle_id)))
            .await
    }

    pub async fn search_vehicles(&self, query: &VehicleQuery) -> ClientResult<Vec<Vehicle>> {
        self.send(
            self.request(Method::GET, "vehicles/search")
                .query(&query.params()),
        )
        .await
    }

    /// Search when any filter is set, otherwise fetch the requested page
    pub async fn browse_vehicles(
        &self,
        query: &VehicleQuery,
        page: u32,
        size: u32,
    ) -> ClientResult<Page<Vehicle>> {
        if query.is_search() {
            let hits = self.search_vehicles(query).await?;
            Ok(Page::single(hits))
        } else {
            self.list_vehicles(page, size).await
        }
    }

    pub async fn owner_vehicles(&self, owner_id: i64) -> ClientResult<Vec<Vehicle>> {
        self.send(self.request(Method::GET, &format!("vehicles/user/{}", owner_id)))
            .await
    }

    /// Create a listing; always multipart, images go in `images` parts
    pub async fn create_vehicle(&self, upload: &VehicleUpload) -> ClientResult<Vehicle> {
        let form = multipart_form(upload, "images")?;
        self.send(self.request(Method::POST, "vehicles").multipart(form))
            .await
    }

    /// Update a listing.
    ///
    /// Metadata alone goes as JSON to `/{id}/basic`; with new images it is a
    /// multipart `PUT /{id}` with `newImages` parts.
    pub async fn update_vehicle(&self, vehicle_id: i64, upload: &VehicleUpload) -> ClientResult<Vehicle> {
        match upload {
            VehicleUpload::MetadataOnly(vehicle) => {
                self.send(
                    self.request(Method::PUT, &format!("vehicles/{}/basic", vehicle_id))
                        .json(vehicle),
                )
                .await
            }
            VehicleUpload::WithAttachments { .. } => {
                let form = multipart_form(upload, "newImages")?;
                self.send(
                    self.request(Method::PUT, &format!("vehicles/{}", vehicle_id))
                        .multipart(form),
                )
                .await
            }
        }
    }

    pub async fn delete_vehicle(&self, vehicle_id: i64) -> ClientResult<()> {
        self.send_unit(self.request(Method::DELETE, &format!("vehicles/{}", vehicle_id)))
            .await
    }
}

/// `vehicle` JSON part plus one `image_field` part per attachment
fn multipart_form(upload: &VehicleUpload, image_field: &'static str) -> ClientResult<Form> {
    let mut form = Form::new().text("vehicle", serde_json::to_string(upload.vehicle())?);

    for attachment in upload.attachments() {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)?;
        form = form.part(image_field, part);
    }

    Ok(form)
}
