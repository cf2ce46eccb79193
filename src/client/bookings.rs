//! `/api/bookings` calls

use reqwest::Method;
use serde_json::json;

use crate::bookings::{Booking, BookingAction, BookingRequest, BookingStatus};

use super::error::{ClientError, ClientResult};
use super::http::BackendClient;

impl BackendClient {
    pub async fn create_booking(&self, request: &BookingRequest) -> ClientResult<Booking> {
        self.send(self.request(Method::POST, "bookings").json(request))
            .await
    }

    pub async fn all_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.send(self.request(Method::GET, "bookings")).await
    }

    pub async fn user_bookings(&self, user_id: i64) -> ClientResult<Vec<Booking>> {
        self.send(self.request(Method::GET, &format!("bookings/user/{}", user_id)))
            .await
    }

    /// Bookings on vehicles owned by `owner_id`
    pub async fn owner_bookings(&self, owner_id: i64) -> ClientResult<Vec<Booking>> {
        self.send(self.request(Method::GET, &format!("bookings/owner/{}", owner_id)))
            .await
    }

    pub async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> ClientResult<Booking> {
        self.send(
            self.request(Method::PUT, &format!("bookings/{}/status", booking_id))
                .json(&json!({ "status": status })),
        )
        .await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> ClientResult<()> {
        self.send_unit(
            self.request(Method::PUT, &format!("bookings/{}/cancel", booking_id))
                .json(&json!({})),
        )
        .await
    }

    pub async fn complete_booking(&self, booking_id: i64) -> ClientResult<Booking> {
        self.send(
            self.request(Method::PUT, &format!("bookings/{}/complete", booking_id))
                .json(&json!({})),
        )
        .await
    }

    /// Rendered rental agreement document, as served by the backend
    pub async fn fetch_agreement(&self, booking_id: i64) -> ClientResult<Vec<u8>> {
        self.send_bytes(self.request(Method::GET, &format!("bookings/{}/agreement", booking_id)))
            .await
    }

    /// Ask the backend to apply `action`.
    ///
    /// The backend has the final say: any non-2xx answer other than 401 comes
    /// back as [`ClientError::TransitionRejected`]. Callers reload the booking
    /// list afterwards rather than patching local state.
    pub async fn request_transition(&self, booking_id: i64, action: BookingAction) -> ClientResult<()> {
        let result = match action {
            BookingAction::Approve | BookingAction::Reject => self
                .update_booking_status(booking_id, action.target_status())
                .await
                .map(|_| ()),
            BookingAction::Cancel => self.cancel_booking(booking_id).await,
            BookingAction::Complete => self.complete_booking(booking_id).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                tracing::info!("Booking {}: {} accepted", booking_id, action);
                Ok(())
            }
            Err(ClientError::Status { status, body }) => {
                tracing::warn!("Booking {}: {} rejected ({})", booking_id, action, status);
                Err(ClientError::TransitionRejected {
                    booking_id,
                    action,
                    status,
                    reason: body,
                })
            }
            Err(e) => Err(e),
        }
    }
}
