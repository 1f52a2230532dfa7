//! # Domain Errors
//!
//! Error types for domain validation and arithmetic.

use thiserror::Error;

/// Error type for domain operations.
///
/// Represents validation and arithmetic failures in the domain layer.
/// Provider and transport failures live in
/// [`ProviderError`](crate::infrastructure::providers::error::ProviderError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Search request failed validation.
    #[error("invalid search request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// A price value is out of domain (negative or unrepresentable).
    #[error("invalid price: {message}")]
    InvalidPrice {
        /// Error message.
        message: String,
    },

    /// A star rating is out of the 0-5 range.
    #[error("invalid star rating: {value}")]
    InvalidStarRating {
        /// The rejected value.
        value: i64,
    },

    /// Checked arithmetic failed (overflow or division by zero).
    #[error("arithmetic error in {operation}")]
    Arithmetic {
        /// The operation that failed.
        operation: &'static str,
    },
}

impl DomainError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice {
            message: message.into(),
        }
    }

    /// Creates an arithmetic error for the named operation.
    #[must_use]
    pub fn arithmetic(operation: &'static str) -> Self {
        Self::Arithmetic { operation }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
