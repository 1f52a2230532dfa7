//! # Provider Adapters
//!
//! Integrations with upstream travel offer providers.
//!
//! Each adapter implements [`ProviderAdapter`](traits::ProviderAdapter) for
//! one vendor API and one offer category, normalizing vendor payloads into
//! the canonical offer types. Adapters never panic on vendor data: missing
//! fields become sentinels, malformed records are skipped, and transport
//! failures surface as [`ProviderError`](error::ProviderError) for the
//! orchestrator to degrade gracefully.
//!
//! ## Adapters
//!
//! - [`amadeus`]: Amadeus Self-Service API (OAuth2), flights and hotels
//! - [`kiwi`]: Kiwi.com via RapidAPI, flights
//! - [`google_flights`]: Google Flights via RapidAPI, flights
//! - [`booking_com`]: Booking.com via RapidAPI, hotels

pub mod amadeus;
pub mod booking_com;
pub mod error;
pub mod google_flights;
pub mod http_client;
pub mod kiwi;
pub mod token_cache;
pub mod traits;

pub use amadeus::{AmadeusAuth, AmadeusFlights, AmadeusHotels};
pub use booking_com::BookingComHotels;
pub use error::{ProviderError, ProviderResult};
pub use google_flights::GoogleFlights;
pub use http_client::HttpClient;
pub use kiwi::KiwiFlights;
pub use token_cache::TokenCache;
pub use traits::{FlightProviderRef, HotelProviderRef, ProviderAdapter};
