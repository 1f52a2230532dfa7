//! # Provider Errors
//!
//! Error types for provider adapter operations.
//!
//! This module provides error types for provider operations including
//! offer searches, credential acquisition, and response decoding.
//!
//! # Examples
//!
//! ```
//! use trip_deals::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::timeout("Request timed out after 20000ms");
//! assert!(error.is_retryable());
//!
//! let error = ProviderError::authentication("Invalid API key");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::value_objects::ProviderId;
use thiserror::Error;

/// Error type for provider adapter operations.
///
/// Represents errors that can occur when talking to upstream travel APIs,
/// including network issues, authentication failures, and malformed
/// responses. The orchestrator treats every variant the same way (log and
/// continue); the classification predicates exist for diagnostics and for
/// the single 401 re-authentication retry inside adapters.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error, including upstream 5xx responses.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure (401/403, failed token
    /// exchange).
    #[error("provider authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Required credentials are not configured.
    ///
    /// Adapters normally handle this themselves by returning an empty
    /// result; the variant exists for mandatory credential steps.
    #[error("provider credentials missing: {provider}")]
    MissingCredentials {
        /// The provider lacking credentials.
        provider: ProviderId,
    },

    /// Rate limit exceeded.
    #[error("provider rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
        /// Retry after duration in milliseconds.
        retry_after_ms: Option<u64>,
    },

    /// Invalid request parameters (upstream 400).
    #[error("provider invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Provider is unavailable for this search.
    #[error("provider unavailable: {provider} - {message}")]
    Unavailable {
        /// The provider ID.
        provider: ProviderId,
        /// Error message.
        message: String,
    },

    /// Protocol or format error (unparseable body, unexpected status).
    #[error("provider protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Internal adapter error.
    #[error("provider internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a missing credentials error.
    #[must_use]
    pub fn missing_credentials(provider: ProviderId) -> Self {
        Self::MissingCredentials { provider }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: None,
        }
    }

    /// Creates a rate limited error with retry duration.
    #[must_use]
    pub fn rate_limited_with_retry(message: impl Into<String>, retry_after_ms: u64) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: Some(retry_after_ms),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a provider unavailable error.
    #[must_use]
    pub fn unavailable(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Unavailable {
            provider,
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Connection { .. }
                | Self::RateLimited { .. }
                | Self::Unavailable { .. }
        )
    }

    /// Returns true if this error relates to credentials.
    ///
    /// Adapters use this to decide whether a failed call warrants one
    /// token refresh and retry.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::MissingCredentials { .. }
        )
    }

    /// Returns true if this error is a client error (bad request).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Authentication { .. }
        )
    }

    /// Returns the retry delay in milliseconds, if applicable.
    #[must_use]
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = ProviderError::timeout("test");
        assert!(error.is_retryable());
        assert!(!error.is_client_error());
    }

    #[test]
    fn connection_is_retryable() {
        let error = ProviderError::connection("test");
        assert!(error.is_retryable());
    }

    #[test]
    fn rate_limited_carries_retry_delay() {
        let error = ProviderError::rate_limited_with_retry("test", 1000);
        assert!(error.is_retryable());
        assert_eq!(error.retry_after_ms(), Some(1000));
    }

    #[test]
    fn authentication_is_credential_error() {
        let error = ProviderError::authentication("test");
        assert!(!error.is_retryable());
        assert!(error.is_credential_error());
        assert!(error.is_client_error());
    }

    #[test]
    fn missing_credentials_is_credential_error() {
        let error = ProviderError::missing_credentials(ProviderId::new("kiwi"));
        assert!(error.is_credential_error());
        assert!(!error.is_retryable());
    }

    #[test]
    fn unavailable_is_retryable() {
        let error = ProviderError::unavailable(ProviderId::new("amadeus-flights"), "down");
        assert!(error.is_retryable());
    }

    #[test]
    fn display_format() {
        let error = ProviderError::timeout("request timed out");
        let display = error.to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
