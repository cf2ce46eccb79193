//! HTTP client for the marketplace REST backend

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;

use super::error::{ClientError, ClientResult};
use super::session::Session;

/// Typed client for `{base_url}/api/...`.
///
/// Every call is a single request: no retries, no deduplication and no
/// cancellation. Results arrive in completion order.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.backend_url.clone())
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Authenticate as whoever the session belongs to
    pub fn with_session(mut self, session: &Session) -> Self {
        self.token = session.token.clone();
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request, attaching the bearer token when there is one
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and decode a JSON body
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = Self::check_status(request.send().await?).await?;
        response.json().await.map_err(Into::into)
    }

    /// Send and ignore whatever body comes back
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> ClientResult<()> {
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    /// Send and return the raw body
    pub(crate) async fn send_bytes(&self, request: RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Backend responded {}: {}", status, body);

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            _ => Err(ClientError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
