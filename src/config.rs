//! Environment-driven configuration

use std::env;

/// Service configuration, read once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Base URL of the marketplace REST backend (without the `/api` suffix)
    pub backend_url: String,
    /// Currency code attached to every money value in responses
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        if backend_url.trim().is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }

        let currency = env::var("CURRENCY").unwrap_or_else(|_| "LKR".to_string());

        Ok(Config {
            server_host,
            server_port,
            backend_url,
            currency,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            backend_url: "http://localhost:8080".to_string(),
            currency: "LKR".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SERVER_PORT must be a valid port number")]
    InvalidPort,

    #[error("BACKEND_URL must not be empty")]
    EmptyBackendUrl,
}
