//! Thin wrapper over `reqwest` for the backend API.
//!
//! Every request carries the session cookie jar plus the default headers
//! below. Headers set on an individual request take precedence over the
//! defaults.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;

use crate::AuthError;

/// Marker header that makes ngrok tunnels skip their interstitial page.
/// Other backends ignore it.
pub const SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(SKIP_BROWSER_WARNING),
        HeaderValue::from_static("true"),
    );
    headers
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client rooted at `base_url` with its own cookie store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Client` if the TLS backend or HTTP client cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(default_headers())
            .build()
            .map_err(|e| AuthError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`. Absolute endpoints pass through unchanged.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            return endpoint.to_string();
        }
        format!("{}{endpoint}", self.base_url.trim_end_matches('/'))
    }

    /// Start a request with the client's defaults applied.
    pub fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        tracing::debug!(%method, %url, "api request");
        self.http.request(method, url)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Network` if the request cannot be completed.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AuthError> {
        send(self.request(Method::GET, endpoint)).await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Network` if the request cannot be completed.
    pub async fn post(&self, endpoint: &str) -> Result<Response, AuthError> {
        send(self.request(Method::POST, endpoint)).await
    }

    /// POST `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Network` if the request cannot be completed.
    pub async fn post_json<B>(&self, endpoint: &str, body: &B) -> Result<Response, AuthError>
    where
        B: Serialize + ?Sized,
    {
        send(self.request(Method::POST, endpoint).json(body)).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, AuthError> {
    let response = request
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    tracing::debug!(status = %response.status(), url = %response.url(), "api response");
    Ok(response)
}
