//! Builder for creating and configuring ApiClient instances.

use std::time::Duration;

use reqwest::Url;

use super::{ApiClient, DEFAULT_TIMEOUT};
use crate::{
    config::Config,
    error::{Result, VanSalesError},
};

/// Builder for creating and configuring ApiClient instances.
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Config::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("vansales/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Starts from the API URL of a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_base_url(config.api_url.clone())
    }

    /// Sets the root URL of the journey plan API, e.g. `http://10.0.2.2:3000`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout. Only tests shorten it; the client
    /// otherwise always uses [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::Configuration` if the base URL is not an
    /// absolute http(s) URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = Url::parse(&self.base_url).map_err(|e| VanSalesError::Configuration {
            message: format!("Invalid API URL '{}': {e}", self.base_url),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(VanSalesError::Configuration {
                message: format!("API URL must use http or https: {}", self.base_url),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| VanSalesError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(ApiClient::new(http, base_url))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
