//! `/api/auth` calls

use reqwest::Method;

use crate::models::{
    AuthResponse, ChangePasswordRequest, LoginRequest, ProfileUpdate, SignupRequest, User,
};

use super::error::ClientResult;
use super::http::BackendClient;
use super::session::Session;

impl BackendClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<AuthResponse> {
        self.send(self.request(Method::POST, "auth/login").json(credentials))
            .await
    }

    pub async fn signup(&self, details: &SignupRequest) -> ClientResult<AuthResponse> {
        self.send(self.request(Method::POST, "auth/signup").json(details))
            .await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.send_unit(self.request(Method::POST, "auth/logout")).await
    }

    /// Log in, then start `session` and authenticate this client with it
    pub async fn sign_in(
        &mut self,
        session: &mut Session,
        credentials: &LoginRequest,
    ) -> ClientResult<()> {
        let auth = self.login(credentials).await?;
        tracing::info!("Signed in as {}", auth.user.email);
        self.set_token(Some(auth.token.clone()));
        session.begin(auth);
        Ok(())
    }

    /// Tell the backend, then drop local credentials whatever it answered
    pub async fn sign_out(&mut self, session: &mut Session) {
        if let Err(e) = self.logout().await {
            tracing::warn!("Logout request failed: {}", e);
        }
        self.set_token(None);
        session.clear();
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        self.send(self.request(Method::PUT, "auth/profile").json(update))
            .await
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ClientResult<()> {
        let body = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.send_unit(self.request(Method::POST, "auth/change-password").json(&body))
            .await
    }

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.send(self.request(Method::GET, "auth/users")).await
    }

    pub async fn delete_user(&self, user_id: i64) -> ClientResult<()> {
        self.send_unit(self.request(Method::DELETE, &format!("auth/users/{}", user_id)))
            .await
    }
}
