//! # Deal Search Service
//!
//! The top-level search pipeline.
//!
//! One call runs both provider categories concurrently, merges and
//! deduplicates each category, cross-matches the survivors into deals,
//! and reports what happened along the way. The only hard error is a
//! malformed request; total provider failure degrades to an outcome with
//! zero deals.

use crate::application::services::aggregation::merge;
use crate::application::services::matching::DealMatcher;
use crate::application::services::orchestrator::{FallbackOrchestrator, FallbackPolicy};
use crate::domain::entities::{Deal, FlightOffer, HotelOffer, SearchRequest};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{ProviderId, Timestamp};
use crate::infrastructure::config::Settings;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::{
    AmadeusAuth, AmadeusFlights, AmadeusHotels, BookingComHotels, FlightProviderRef, GoogleFlights,
    HotelProviderRef, KiwiFlights,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one deal search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Ranked deals, cheapest per person first.
    deals: Vec<Deal>,
    /// Deduplicated flight offers considered for matching.
    flights_found: usize,
    /// Deduplicated hotel offers considered for matching.
    hotels_found: usize,
    /// Providers invoked across both categories.
    providers_queried: usize,
    /// Providers that failed with an error.
    providers_failed: Vec<ProviderId>,
    /// When the search ran.
    queried_at: Timestamp,
}

impl SearchOutcome {
    /// Returns the ranked deals.
    #[must_use]
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Returns the number of deals.
    #[must_use]
    pub fn count(&self) -> usize {
        self.deals.len()
    }

    /// Returns the deduplicated flight offer count.
    #[inline]
    #[must_use]
    pub fn flights_found(&self) -> usize {
        self.flights_found
    }

    /// Returns the deduplicated hotel offer count.
    #[inline]
    #[must_use]
    pub fn hotels_found(&self) -> usize {
        self.hotels_found
    }

    /// Returns how many providers were invoked.
    #[inline]
    #[must_use]
    pub fn providers_queried(&self) -> usize {
        self.providers_queried
    }

    /// Returns the providers that failed.
    #[must_use]
    pub fn providers_failed(&self) -> &[ProviderId] {
        &self.providers_failed
    }

    /// Returns when the search ran.
    #[inline]
    #[must_use]
    pub fn queried_at(&self) -> Timestamp {
        self.queried_at
    }
}

/// Top-level deal search pipeline.
#[derive(Debug)]
pub struct DealSearchService {
    flights: FallbackOrchestrator<FlightOffer>,
    hotels: FallbackOrchestrator<HotelOffer>,
    matcher: DealMatcher,
}

impl DealSearchService {
    /// Creates a service over pre-built category orchestrators.
    #[must_use]
    pub fn new(
        flights: FallbackOrchestrator<FlightOffer>,
        hotels: FallbackOrchestrator<HotelOffer>,
    ) -> Self {
        Self {
            flights,
            hotels,
            matcher: DealMatcher::new(),
        }
    }

    /// Wires up the full provider stack from settings.
    ///
    /// Flight chain: Amadeus, Kiwi, Google Flights. Hotel chain: Amadeus,
    /// Booking.com. Providers without configured credentials stay in the
    /// chain and contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if an HTTP client cannot be
    /// created.
    pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
        let auth = Arc::new(AmadeusAuth::new(&settings.amadeus)?);

        let policy = if settings.search.first_success {
            FallbackPolicy::FirstSuccess
        } else {
            FallbackPolicy::AggregateAll
        };

        let flight_chain: Vec<FlightProviderRef> = vec![
            Arc::new(AmadeusFlights::new(&settings.amadeus, Arc::clone(&auth))?),
            Arc::new(KiwiFlights::new(&settings.kiwi)?),
            Arc::new(GoogleFlights::new(&settings.google_flights)?),
        ];
        let hotel_chain: Vec<HotelProviderRef> = vec![
            Arc::new(AmadeusHotels::new(&settings.amadeus, Arc::clone(&auth))?),
            Arc::new(BookingComHotels::new(&settings.booking)?),
        ];

        Ok(Self::new(
            FallbackOrchestrator::new(flight_chain).with_policy(policy),
            FallbackOrchestrator::new(hotel_chain).with_policy(policy),
        ))
    }

    /// Runs the full pipeline for a request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` for a malformed request; this
    /// is the only failure mode. Provider trouble degrades the outcome
    /// instead.
    pub async fn search(&self, request: &SearchRequest) -> DomainResult<SearchOutcome> {
        request.validate()?;
        if request.starts_in_past() {
            warn!(%request, "search start date is in the past");
        }
        info!(%request, "starting deal search");

        // Categories are independent; run both chains concurrently.
        let (flight_outcome, hotel_outcome) = tokio::join!(
            self.flights.collect(request),
            self.hotels.collect(request)
        );

        let providers_queried =
            flight_outcome.providers_queried() + hotel_outcome.providers_queried();
        let mut providers_failed = flight_outcome.providers_failed().to_vec();
        providers_failed.extend_from_slice(hotel_outcome.providers_failed());

        let flights = merge(flight_outcome.into_batches());
        let hotels = merge(hotel_outcome.into_batches());

        let deals = self.matcher.match_deals(&flights, &hotels, request);
        info!(
            flights = flights.len(),
            hotels = hotels.len(),
            deals = deals.len(),
            failed = providers_failed.len(),
            "deal search complete"
        );

        Ok(SearchOutcome {
            deals,
            flights_found: flights.len(),
            hotels_found: hotels.len(),
            providers_queried,
            providers_failed,
            queried_at: Timestamp::now(),
        })
    }
}
