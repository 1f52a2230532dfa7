//! # Provider Adapter Trait
//!
//! Port definition for provider integrations.
//!
//! This module defines the [`ProviderAdapter`] trait that all provider
//! integrations implement. One adapter covers one vendor API and one offer
//! category; the associated `Offer` type is [`FlightOffer`] or
//! [`HotelOffer`].
//!
//! # Examples
//!
//! ```ignore
//! use trip_deals::infrastructure::providers::traits::ProviderAdapter;
//! use trip_deals::infrastructure::providers::error::ProviderResult;
//!
//! #[derive(Debug)]
//! struct MyFlightsAdapter { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ProviderAdapter for MyFlightsAdapter {
//!     type Offer = FlightOffer;
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{FlightOffer, HotelOffer, SearchRequest};
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Trait defining the interface for provider adapters.
///
/// All provider integrations implement this trait to give the fallback
/// orchestrator a uniform interface to heterogeneous vendor APIs.
///
/// # Error Handling
///
/// `search` returns `ProviderResult<Vec<Offer>>`. The contract with the
/// orchestrator:
///
/// - Missing optional credentials (RapidAPI keys) are an expected
///   condition: return `Ok(vec![])`, do not error.
/// - A failed mandatory credential step (OAuth token exchange) is a hard
///   error.
/// - Transport and decoding failures are errors; the orchestrator logs
///   them and degrades that provider to an empty contribution.
/// - A single malformed record in an otherwise valid response is skipped,
///   never fatal.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + fmt::Debug {
    /// The canonical offer type this adapter produces.
    type Offer: Send;

    /// Returns the provider ID.
    fn provider_id(&self) -> &ProviderId;

    /// Returns the timeout in milliseconds for provider calls.
    fn timeout_ms(&self) -> u64;

    /// Searches the provider for offers matching the request.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Timeout` - Request timed out
    /// - `ProviderError::Authentication` - Credential exchange rejected
    /// - `ProviderError::Connection` - Network failure or upstream 5xx
    /// - `ProviderError::Protocol` - Unparseable response
    async fn search(&self, request: &SearchRequest) -> ProviderResult<Vec<Self::Offer>>;
}

/// A shared flight provider handle, as held by the orchestrator.
pub type FlightProviderRef = Arc<dyn ProviderAdapter<Offer = FlightOffer>>;

/// A shared hotel provider handle, as held by the orchestrator.
pub type HotelProviderRef = Arc<dyn ProviderAdapter<Offer = HotelOffer>>;
