//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for provider adapters.
//!
//! This module provides a reusable HTTP client with:
//! - Per-vendor timeouts
//! - JSON deserialization
//! - Status-code to [`ProviderError`] mapping
//!
//! # Examples
//!
//! ```ignore
//! use trip_deals::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(20_000)?;
//! let response: MyResponse = client
//!     .get_with_params("https://api.example.com/search", &params)
//!     .await?;
//! ```

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
///
/// Provides a convenient interface for making vendor HTTP requests with
/// proper error handling and timeout configuration.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Arguments
    ///
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Connection`/`Timeout` if the request fails,
    /// `ProviderError::Protocol` if the response cannot be parsed, or a
    /// status-mapped error for non-2xx responses.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a GET request with query parameters and custom headers.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Connection`/`Timeout` if the request fails,
    /// `ProviderError::Protocol` if the response cannot be parsed, or a
    /// status-mapped error for non-2xx responses.
    pub async fn get_with_params_and_headers<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
        headers: reqwest::header::HeaderMap,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a POST request with a URL-encoded form body.
    ///
    /// Used for OAuth2 client-credentials token exchanges.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Connection`/`Timeout` if the request fails,
    /// `ProviderError::Protocol` if the response cannot be parsed, or a
    /// status-mapped error for non-2xx responses.
    pub async fn post_form<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        form: &B,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ProviderError::protocol(format!("Failed to parse response: {}", e))
            })
        } else {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body, retry_after_ms))
        }
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a ProviderError. A numeric `Retry-After`
    /// header is carried through on 429 responses.
    fn map_status_error(
        &self,
        status: StatusCode,
        body: &str,
        retry_after_ms: Option<u64>,
    ) -> ProviderError {
        match status {
            StatusCode::BAD_REQUEST => {
                ProviderError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::NOT_FOUND => {
                ProviderError::protocol(format!("Resource not found: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => match retry_after_ms {
                Some(ms) => ProviderError::rate_limited_with_retry("Rate limit exceeded", ms),
                None => ProviderError::rate_limited("Rate limit exceeded"),
            },
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                ProviderError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => ProviderError::protocol(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

/// Builds an `Authorization: Bearer <token>` header map.
///
/// # Errors
///
/// Returns `ProviderError::Internal` if the token contains characters that
/// are not valid in a header value.
pub fn bearer_headers(token: &str) -> ProviderResult<reqwest::header::HeaderMap> {
    let mut headers = reqwest::header::HeaderMap::new();
    let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| ProviderError::internal(format!("Invalid bearer token: {}", e)))?;
    headers.insert(reqwest::header::AUTHORIZATION, value);
    Ok(headers)
}

/// Builds the `X-RapidAPI-Key` / `X-RapidAPI-Host` header map.
///
/// # Errors
///
/// Returns `ProviderError::Internal` if the key or host contains characters
/// that are not valid in a header value.
pub fn rapidapi_headers(key: &str, host: &str) -> ProviderResult<reqwest::header::HeaderMap> {
    let mut headers = reqwest::header::HeaderMap::new();
    let key = reqwest::header::HeaderValue::from_str(key)
        .map_err(|e| ProviderError::internal(format!("Invalid RapidAPI key: {}", e)))?;
    let host = reqwest::header::HeaderValue::from_str(host)
        .map_err(|e| ProviderError::internal(format!("Invalid RapidAPI host: {}", e)))?;
    headers.insert("X-RapidAPI-Key", key);
    headers.insert("X-RapidAPI-Host", host);
    Ok(headers)
}
