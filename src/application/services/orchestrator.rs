//! # Fallback Orchestrator
//!
//! Ordered, failure-tolerant provider chains.
//!
//! One orchestrator owns the provider chain for one offer category
//! (flights or hotels). Providers are invoked sequentially in priority
//! order, each exactly once per search. A provider error never aborts the
//! category: it is logged and that provider contributes nothing.
//!
//! # Examples
//!
//! ```ignore
//! use trip_deals::application::services::{FallbackOrchestrator, FallbackPolicy};
//!
//! let flights = FallbackOrchestrator::new(vec![amadeus, kiwi, google])
//!     .with_policy(FallbackPolicy::FirstSuccess);
//! let outcome = flights.collect(&request).await;
//! ```

use crate::domain::entities::SearchRequest;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::traits::ProviderAdapter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// How a category chain treats providers after the first useful answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Query every provider and aggregate all batches.
    #[default]
    AggregateAll,
    /// Stop the chain at the first provider that returns any offers.
    FirstSuccess,
}

/// Result of running one category's provider chain.
///
/// Offers are kept as one batch per contributing provider so the
/// aggregation stage can merge and deduplicate across providers.
#[derive(Debug)]
pub struct CategoryOutcome<O> {
    batches: Vec<Vec<O>>,
    providers_queried: usize,
    providers_failed: Vec<ProviderId>,
}

impl<O> CategoryOutcome<O> {
    /// Returns the per-provider offer batches.
    #[must_use]
    pub fn batches(&self) -> &[Vec<O>] {
        &self.batches
    }

    /// Consumes the outcome, returning the batches.
    #[must_use]
    pub fn into_batches(self) -> Vec<Vec<O>> {
        self.batches
    }

    /// Returns how many providers were actually invoked.
    #[inline]
    #[must_use]
    pub fn providers_queried(&self) -> usize {
        self.providers_queried
    }

    /// Returns the providers that failed with an error.
    #[must_use]
    pub fn providers_failed(&self) -> &[ProviderId] {
        &self.providers_failed
    }

    /// Returns the total offer count across batches.
    #[must_use]
    pub fn total_offers(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

/// Ordered provider chain for one offer category.
pub struct FallbackOrchestrator<O> {
    providers: Vec<Arc<dyn ProviderAdapter<Offer = O>>>,
    policy: FallbackPolicy,
}

impl<O> std::fmt::Debug for FallbackOrchestrator<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackOrchestrator")
            .field("providers", &self.providers.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<O: Send> FallbackOrchestrator<O> {
    /// Creates an orchestrator over an ordered provider chain with the
    /// default [`FallbackPolicy::AggregateAll`] policy.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter<Offer = O>>>) -> Self {
        Self {
            providers,
            policy: FallbackPolicy::default(),
        }
    }

    /// Sets the fallback policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured policy.
    #[inline]
    #[must_use]
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Returns the number of providers in the chain.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Runs the chain for a request.
    ///
    /// Never fails: provider errors are logged and degrade to empty
    /// contributions. With [`FallbackPolicy::FirstSuccess`] the chain
    /// stops after the first non-empty batch; errors and empty batches
    /// both fall through to the next provider.
    pub async fn collect(&self, request: &SearchRequest) -> CategoryOutcome<O> {
        let mut batches = Vec::new();
        let mut providers_failed = Vec::new();
        let mut providers_queried = 0;

        for provider in &self.providers {
            providers_queried += 1;
            match provider.search(request).await {
                Ok(offers) => {
                    info!(
                        provider = %provider.provider_id(),
                        count = offers.len(),
                        "provider returned offers"
                    );
                    let got_offers = !offers.is_empty();
                    if got_offers {
                        batches.push(offers);
                    }
                    if got_offers && self.policy == FallbackPolicy::FirstSuccess {
                        break;
                    }
                }
                Err(error) => {
                    warn!(
                        provider = %provider.provider_id(),
                        %error,
                        "provider failed, continuing with remaining providers"
                    );
                    providers_failed.push(provider.provider_id().clone());
                }
            }
        }

        CategoryOutcome {
            batches,
            providers_queried,
            providers_failed,
        }
    }
}
