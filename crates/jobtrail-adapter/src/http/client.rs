/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{ApiError, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Error body shape the backend uses for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Main HTTP client for the jobtrail API.
///
/// The base URL comes from configuration; endpoints are root-relative
/// paths joined onto it. Authenticated endpoints take the bearer token
/// explicitly per call, so a caller can never accidentally reuse a stale
/// token where a freshly issued one is required.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for unauthenticated endpoints
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder for endpoints requiring a bearer token
    pub(crate) fn request_with_bearer(
        &self,
        method: Method,
        endpoint: &str,
        token: &str,
    ) -> Result<RequestBuilder> {
        Ok(self.request(method, endpoint)?.bearer_auth(token))
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx responses become [`ApiError::Api`] carrying the backend's
    /// `message` field when the error body has one.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        Err(ApiError::api_error(status, message))
    }
}
