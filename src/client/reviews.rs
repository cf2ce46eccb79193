//! `/api/reviews` calls

use reqwest::Method;

use crate::models::{Review, ReviewRequest};

use super::error::ClientResult;
use super::http::BackendClient;

impl BackendClient {
    pub async fn create_review(&self, request: &ReviewRequest) -> ClientResult<Review> {
        self.send(self.request(Method::POST, "reviews").json(request))
            .await
    }

    pub async fn vehicle_reviews(&self, vehicle_id: i64) -> ClientResult<Vec<Review>> {
        self.send(self.request(Method::GET, &format!("reviews/vehicle/{}", vehicle_id)))
            .await
    }

    pub async fn user_reviews(&self, user_id: i64) -> ClientResult<Vec<Review>> {
        self.send(self.request(Method::GET, &format!("reviews/user/{}", user_id)))
            .await
    }

    /// Reviews left on vehicles owned by `owner_id`
    pub async fn owner_reviews(&self, owner_id: i64) -> ClientResult<Vec<Review>> {
        self.send(self.request(Method::GET, &format!("reviews/owner/{}", owner_id)))
            .await
    }

    pub async fn review_exists(&self, booking_id: i64) -> ClientResult<bool> {
        self.send(self.request(Method::GET, &format!("reviews/booking/{}/exists", booking_id)))
            .await
    }
}
