//
//  scribe-cms
//  api/client.rs
//
//  Copyright (c) 2026 Scribe CMS contributors. All rights reserved.
//

//! # HTTP Client for the Scribe API
//!
//! This module provides the core HTTP client for interacting with the Scribe
//! headless CMS. It handles base URL resolution, bearer token injection, and
//! request/response handling.
//!
//! ## Features
//!
//! - Configurable base URL (defaults to the production origin)
//! - `Authorization: Bearer` header injection on every request when a token
//!   is configured
//! - JSON pass-through responses (`serde_json::Value`)
//! - Raw byte responses for binary downloads
//! - Custom User-Agent header

use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::common::ApiError;

/// Production origin of the Scribe API.
///
/// Used whenever [`ClientConfig::base_url`] is left unset.
pub const DEFAULT_BASE_URL: &str = "https://api.scribecms.io";

/// Construction-time configuration for [`ScribeClient`].
///
/// Both fields are optional: without a token the client can still reach the
/// public document endpoints, and without a base URL it targets the production
/// origin.
///
/// # Example
///
/// ```rust
/// use scribe_cms::ClientConfig;
///
/// let config = ClientConfig {
///     api_token: Some("your-token".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Bearer token sent as `Authorization: Bearer <token>` on every request.
    ///
    /// When `None`, no Authorization header is sent at all.
    pub api_token: Option<String>,

    /// Origin the client talks to, e.g. `https://api.scribecms.io`.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`]. A trailing slash is trimmed so paths
    /// can be appended verbatim.
    pub base_url: Option<String>,
}

/// The HTTP client for the Scribe headless CMS API.
///
/// The client holds its configuration immutably for its whole lifetime and
/// performs no network activity at construction. Every public operation issues
/// exactly one request and either returns the decoded response or fails with
/// an [`ApiError`]; there is no retry, caching, or request deduplication.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use scribe_cms::{ClientConfig, ScribeClient};
///
/// // Anonymous client against production (public endpoints only)
/// let client = ScribeClient::new(ClientConfig::default())?;
///
/// // Authenticated client
/// let client = ScribeClient::new(ClientConfig {
///     api_token: Some("your-token".to_string()),
///     ..Default::default()
/// })?;
/// # Ok::<(), scribe_cms::ApiError>(())
/// ```
///
/// # Lower-level access
///
/// The per-verb helpers ([`get`](Self::get), [`post`](Self::post),
/// [`put`](Self::put), [`delete`](Self::delete)) are public, so endpoints this
/// crate does not wrap can still be reached with the same authentication and
/// error handling.
pub struct ScribeClient {
    /// The underlying HTTP client.
    http: Client,
    /// Origin requests are issued against, without a trailing slash.
    base_url: String,
    /// Optional bearer token.
    api_token: Option<String>,
}

impl ScribeClient {
    /// Creates a new client from the given configuration.
    ///
    /// No request is made; errors can only come from building the underlying
    /// HTTP client.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use scribe_cms::{ClientConfig, ScribeClient};
    ///
    /// let client = ScribeClient::new(ClientConfig::default())?;
    /// assert_eq!(client.base_url(), "https://api.scribecms.io");
    /// # Ok::<(), scribe_cms::ApiError>(())
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("scribe-cms/{}", crate::VERSION))
                .build()?,
            base_url,
            api_token: config.api_token,
        })
    }

    /// Sets the bearer token, builder-style.
    ///
    /// Equivalent to passing [`ClientConfig::api_token`] at construction.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use scribe_cms::{ClientConfig, ScribeClient};
    ///
    /// let client = ScribeClient::new(ClientConfig::default())?
    ///     .with_token("your-token");
    /// # Ok::<(), scribe_cms::ApiError>(())
    /// ```
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Returns the origin this client issues requests against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for `base_url + path` with the Authorization header
    /// applied when a token is configured.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Sends a built request and checks the response status.
    ///
    /// Transport failures propagate untranslated; a completed response with a
    /// non-success status becomes [`ApiError::Request`] without the body being
    /// read.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        Ok(response)
    }

    /// Makes a GET request to the given path and decodes the JSON response.
    ///
    /// The path is appended to the base URL verbatim, query string included.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails, the response status is
    /// not 2xx, or the body cannot be deserialized to `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    /// Makes a GET request and returns the raw response body.
    ///
    /// Used for binary downloads, where the body must not go through JSON
    /// decoding.
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?)
    }

    /// Makes a POST request with a JSON body and decodes the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// Makes a POST request with a multipart form body and decodes the JSON
    /// response.
    ///
    /// Used for file uploads; the caller assembles the form.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    /// Makes a PUT request with a JSON body and decodes the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// Makes a DELETE request and decodes the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::DELETE, path)).await?;
        Ok(response.json().await?)
    }
}
