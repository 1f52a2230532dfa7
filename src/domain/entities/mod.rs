//! # Domain Entities
//!
//! Core business objects for deal search.
//!
//! ## Entities
//!
//! - [`SearchRequest`]: Validated trip search parameters
//! - [`FlightOffer`], [`HotelOffer`]: Canonical normalized offers
//! - [`Deal`]: One flight paired with one hotel, priced per person

pub mod deal;
pub mod offer;
pub mod search_request;

pub use deal::Deal;
pub use offer::{CanonicalOffer, FlightOffer, FlightOfferKey, HotelOffer, HotelOfferKey};
pub use search_request::{SearchRequest, SearchRequestBuilder};
