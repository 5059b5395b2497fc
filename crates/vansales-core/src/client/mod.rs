//! HTTP client for the journey plan API.
//!
//! [`ApiClient`] wraps a `reqwest` client bound to the API's base URL. It is
//! organised like this:
//!
//! - [`builder`]: [`ApiClientBuilder`], base URL validation and timeout
//! - [`endpoints`]: one method per remote endpoint, returning typed models
//! - [`handlers`]: sign-in, journey loading, customer lookup and visit
//!   completion built on top of the endpoints
//!
//! Every request has a fixed 10 second timeout. There are no retries: a
//! failed call is logged and returned to the caller, which decides what to
//! tell the user.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vansales_core::{models::CalendarDay, params::SignIn, ApiClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClientBuilder::new()
//!     .with_base_url("http://localhost:3000")
//!     .build()?;
//!
//! let session = client
//!     .sign_in(&SignIn {
//!         username: "vansales_test01".to_string(),
//!         password: "password123".to_string(),
//!     })
//!     .await?;
//!
//! let snapshot = client.load_journey(&session, &CalendarDay::today()).await?;
//! println!("{} customers on today's plan", snapshot.customers.len());
//!
//! session.sign_out();
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use log::debug;
use reqwest::{Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::{Result, VanSalesError};

pub mod builder;
pub mod endpoints;
pub mod handlers;

pub use builder::ApiClientBuilder;

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the journey plan API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Error body sent by the API alongside non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    /// Creates a new client for the given base URL.
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| VanSalesError::Configuration {
                message: format!("API URL cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{method} {url}");
        Ok(self.http.request(method, url))
    }

    /// Sends the request and decodes a JSON body.
    ///
    /// A non-success status becomes `VanSalesError::Server` carrying the
    /// body's `error` field when present.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
        what: &str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| VanSalesError::from_request(operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VanSalesError::from_request(operation, e))?;

        if !status.is_success() {
            return Err(VanSalesError::Server {
                operation: operation.to_string(),
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| VanSalesError::Decode {
            what: what.to_string(),
            source,
        })
    }
}

/// The `error` field of a JSON error body, if any.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}
