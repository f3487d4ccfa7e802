//! HTTP client for the MediaCloud REST API.
//!
//! Handles bearer authentication, request construction, and the mapping of
//! error responses into [`McError`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use mc_core::config::ClientConfig;
use mc_core::error::{McError, McResult};

use crate::response::ErrorBody;

/// HTTP client for communicating with MediaCloud.
///
/// Wraps reqwest::Client with the bearer header and base URL baked in.
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Base URL for the API (e.g. "https://mediacloud.ng/api").
    api_root: String,
}

impl ApiClient {
    /// Create a client for the hosted API authenticated with `api_key`.
    ///
    /// The key is not validated here. A wrong key surfaces as a remote error
    /// on the first call.
    pub fn new(api_key: impl Into<String>) -> McResult<Self> {
        Self::from_config(&ClientConfig::with_api_key(api_key))
    }

    /// Create a client from explicit configuration.
    pub fn from_config(config: &ClientConfig) -> McResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| McError::Config(format!("invalid api key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());

        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = config.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }

        let inner = builder
            .build()
            .map_err(|e| McError::Config(format!("failed to build HTTP client: {e}")))?;

        let api_root = config.sanitized_base_url();
        debug!("media client ready for {api_root}");

        Ok(Self { inner, api_root })
    }

    /// Get the API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.inner.request(method, self.url(path))
    }

    /// Send a request and map a non-2xx status to a remote error.
    ///
    /// Failures without a response are returned as the original transport error.
    async fn send(&self, builder: RequestBuilder, default_message: &str) -> McResult<Response> {
        let response = builder.send().await?;
        Self::check_status(response, default_message).await
    }

    // --- Public HTTP methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str, default_message: &str) -> McResult<Response> {
        self.send(self.build_request(Method::GET, path), default_message)
            .await
    }

    /// Execute a DELETE request on `prefix` followed by one encoded path segment.
    pub async fn delete_segment(
        &self,
        prefix: &str,
        segment: &str,
        default_message: &str,
    ) -> McResult<Response> {
        let url = self.segment_url(prefix, segment)?;
        debug!("DELETE {}", url.path());
        self.send(self.inner.delete(url), default_message).await
    }

    /// Build `<api_root><prefix>/<segment>` with `segment` percent-encoded.
    fn segment_url(&self, prefix: &str, segment: &str) -> McResult<Url> {
        let mut url = Url::parse(&self.url(prefix))
            .map_err(|e| McError::Config(format!("invalid api url: {e}")))?;
        let url_display = url.to_string();
        url.path_segments_mut()
            .map_err(|_| McError::Config(format!("api url cannot carry a path: {url_display}")))?
            .push(segment);
        Ok(url)
    }

    /// Execute a POST request with a multipart form (for file uploads).
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        default_message: &str,
    ) -> McResult<Response> {
        let builder = self.build_request(Method::POST, path).multipart(form);
        self.send(builder, default_message).await
    }

    // --- Response helpers ---

    /// Deserialize a successful response body.
    ///
    /// A body that does not match `T` is a [`McError::MalformedResponse`].
    pub async fn parse_response<T: DeserializeOwned>(response: Response) -> McResult<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| McError::MalformedResponse(format!("failed to parse response: {e}")))
    }

    /// Convenience: GET + parse.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        default_message: &str,
    ) -> McResult<T> {
        let resp = self.get(path, default_message).await?;
        Self::parse_response(resp).await
    }

    /// Check the HTTP status code and convert to McError if needed.
    async fn check_status(response: Response, default_message: &str) -> McResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body still counts as a server answer.
        let body = response.bytes().await.unwrap_or_default();
        let err = McError::remote(status.as_u16(), ErrorBody::message_from(&body), default_message);
        warn!("request failed with status {}: {}", status.as_u16(), err);
        Err(err)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}
