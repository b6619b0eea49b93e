//! HTTP client wrapper for the travel agent backend
//!
//! Every backend request goes through [`HttpClient`]: it owns the base URL,
//! the default JSON headers and the optional bearer token, and turns each
//! round trip into either a parsed payload or a [`TransportError`].
//!
//! There are no retries, no timeout override and no caching. A call is a
//! single best-effort round trip.

use crate::config::ApiConfig;
use crate::error::{ApiResult, Result, TransportError, TripwiseError};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON-over-HTTP client bound to one backend
///
/// # Examples
///
/// ```
/// use tripwise::client::HttpClient;
/// use tripwise::config::ApiConfig;
///
/// let client = HttpClient::new(&ApiConfig::default()).unwrap();
/// assert_eq!(client.base_url(), "http://localhost:8000");
/// assert_eq!(client.url("/api/health"), "http://localhost:8000/api/health");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is not a valid header value
    /// or the underlying HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.auth_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| TripwiseError::Config(format!("Invalid auth token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("tripwise/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripwiseError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "Initialized backend HTTP client");

        Ok(Self { client, base_url })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an absolute backend path
    ///
    /// The path is appended to the base URL so that a base with a path
    /// prefix keeps it.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a GET and parse the JSON response
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status or a
    /// body that does not parse as `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "Backend request");
        self.send(self.client.get(&url), url).await
    }

    /// Issue a POST with a JSON body and parse the JSON response
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status or a
    /// body that does not parse as `T`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "Backend request");
        self.send(self.client.post(&url).json(body), url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: String) -> ApiResult<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(TransportError::Network { url, source }),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(TransportError::Network { url, source }),
        };

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %url, "Backend returned error status");
            return Err(TransportError::status(status.as_u16(), url, &body));
        }

        serde_json::from_str(&body).map_err(|source| TransportError::Decode { url, source })
    }
}
