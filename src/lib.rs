//! # trip-deals
//!
//! Multi-provider travel deal engine.
//!
//! This crate aggregates flight and hotel offers from several upstream
//! providers (Amadeus, Kiwi, Google Flights, Booking.com), normalizes them
//! into canonical offer types, deduplicates across providers, and matches
//! flights against hotels into ranked package deals filtered by star rating,
//! board basis and per-person budget.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Value objects and entities with validation (prices, star
//!   ratings, offers, deals).
//! - [`application`] - Orchestration services: provider fallback chains,
//!   offer aggregation, deal matching, and the top-level search pipeline.
//! - [`infrastructure`] - Provider adapters, the shared HTTP client, bearer
//!   token caching, and configuration.
//!
//! # Example
//!
//! ```ignore
//! use trip_deals::application::services::DealSearchService;
//! use trip_deals::domain::entities::SearchRequest;
//! use trip_deals::infrastructure::config::Settings;
//!
//! let settings = Settings::load()?;
//! let service = DealSearchService::from_settings(&settings)?;
//! let outcome = service.search(&request).await?;
//! for deal in outcome.deals() {
//!     println!("{deal}");
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{
    DealSearchService, FallbackOrchestrator, FallbackPolicy, SearchOutcome,
};
pub use domain::entities::{Deal, FlightOffer, HotelOffer, SearchRequest};
pub use domain::errors::{DomainError, DomainResult};
pub use infrastructure::config::Settings;
pub use infrastructure::providers::error::{ProviderError, ProviderResult};
pub use infrastructure::providers::traits::ProviderAdapter;
