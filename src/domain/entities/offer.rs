//! # Offer Entities
//!
//! Canonical flight and hotel offers.
//!
//! Provider adapters normalize vendor payloads into these types; everything
//! downstream (aggregation, matching) is vendor-agnostic. Missing vendor
//! fields use sentinels rather than failing: price 0, stars 0, board
//! `UNKNOWN`. The untouched vendor record is kept in `raw` for diagnostics
//! and is excluded from equality-sensitive operations like deduplication.

use crate::domain::value_objects::{BoardType, Price, ProviderId, StarRating};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::Hash;

/// An offer that can be deduplicated and ranked by price.
///
/// The identity key is a pragmatic heuristic, not a contract: two offers
/// with equal keys are assumed to be the same inventory seen through
/// different providers. Keys compare normalized fields exactly.
pub trait CanonicalOffer {
    /// Hashable identity used for cross-provider deduplication.
    type Key: Eq + Hash;

    /// Returns the deduplication key for this offer.
    fn identity_key(&self) -> Self::Key;

    /// Returns the offer price used for ranking.
    fn price(&self) -> Price;
}

/// Deduplication key for flight offers: carrier, price, departure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightOfferKey {
    carrier: String,
    price: Price,
    departure: Option<String>,
}

/// A normalized flight offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    /// Human-readable provider name.
    provider: String,
    /// Provider adapter that produced the offer.
    provider_code: ProviderId,
    /// Total price for all travellers.
    price: Price,
    /// Operating carrier, possibly with a flight number.
    carrier: String,
    /// Departure time as the vendor sent it; format varies by vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    departure: Option<String>,
    /// Arrival time as the vendor sent it.
    #[serde(skip_serializing_if = "Option::is_none")]
    arrival: Option<String>,
    /// Number of stops on the outbound leg.
    #[serde(default)]
    stops: u32,
    /// Total duration as the vendor sent it.
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    /// Deep link for booking, empty when the vendor gives none.
    #[serde(default)]
    link: String,
    /// The untouched vendor record.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<Value>,
}

impl FlightOffer {
    /// Creates a flight offer with the mandatory fields.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        provider_code: ProviderId,
        price: Price,
        carrier: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            provider_code,
            price,
            carrier: carrier.into(),
            departure: None,
            arrival: None,
            stops: 0,
            duration: None,
            link: String::new(),
            raw: None,
        }
    }

    /// Sets departure and arrival times.
    #[must_use]
    pub fn with_times(mut self, departure: Option<String>, arrival: Option<String>) -> Self {
        self.departure = departure;
        self.arrival = arrival;
        self
    }

    /// Sets the stop count.
    #[must_use]
    pub fn with_stops(mut self, stops: u32) -> Self {
        self.stops = stops;
        self
    }

    /// Sets the total duration.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Sets the booking link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Attaches the untouched vendor record.
    #[must_use]
    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Returns the provider display name.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the provider adapter ID.
    #[inline]
    #[must_use]
    pub fn provider_code(&self) -> &ProviderId {
        &self.provider_code
    }

    /// Returns the total price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the carrier.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Returns the vendor departure string.
    #[inline]
    #[must_use]
    pub fn departure(&self) -> Option<&str> {
        self.departure.as_deref()
    }

    /// Returns the vendor arrival string.
    #[inline]
    #[must_use]
    pub fn arrival(&self) -> Option<&str> {
        self.arrival.as_deref()
    }

    /// Returns the stop count.
    #[inline]
    #[must_use]
    pub fn stops(&self) -> u32 {
        self.stops
    }

    /// Returns the vendor duration string.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// Returns the booking link.
    #[inline]
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the untouched vendor record.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }
}

impl CanonicalOffer for FlightOffer {
    type Key = FlightOfferKey;

    fn identity_key(&self) -> FlightOfferKey {
        FlightOfferKey {
            carrier: self.carrier.clone(),
            price: self.price,
            departure: self.departure.clone(),
        }
    }

    #[inline]
    fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for FlightOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlightOffer({} {} @ {})",
            self.provider, self.carrier, self.price
        )
    }
}

/// Deduplication key for hotel offers: name, stars, board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotelOfferKey {
    name: String,
    stars: StarRating,
    board: BoardType,
}

/// A normalized hotel offer for a whole stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    /// Human-readable provider name.
    provider: String,
    /// Provider adapter that produced the offer.
    provider_code: ProviderId,
    /// Hotel name; `"Unknown"` when the vendor omits it.
    name: String,
    /// Star rating, 0 when unknown.
    #[serde(default)]
    stars: StarRating,
    /// Board basis token.
    #[serde(default)]
    board: BoardType,
    /// Total price for the stay.
    price: Price,
    /// Check-in date.
    check_in: NaiveDate,
    /// Check-out date.
    check_out: NaiveDate,
    /// Deep link for booking, empty when the vendor gives none.
    #[serde(default)]
    link: String,
    /// The untouched vendor record.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<Value>,
}

impl HotelOffer {
    /// Fallback hotel name for vendors that omit one.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Creates a hotel offer with the mandatory fields.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        provider_code: ProviderId,
        name: impl Into<String>,
        price: Price,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            provider: provider.into(),
            provider_code,
            name: name.into(),
            stars: StarRating::UNKNOWN,
            board: BoardType::unknown(),
            price,
            check_in,
            check_out,
            link: String::new(),
            raw: None,
        }
    }

    /// Sets the star rating.
    #[must_use]
    pub fn with_stars(mut self, stars: StarRating) -> Self {
        self.stars = stars;
        self
    }

    /// Sets the board basis.
    #[must_use]
    pub fn with_board(mut self, board: BoardType) -> Self {
        self.board = board;
        self
    }

    /// Sets the booking link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Attaches the untouched vendor record.
    #[must_use]
    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Returns the provider display name.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the provider adapter ID.
    #[inline]
    #[must_use]
    pub fn provider_code(&self) -> &ProviderId {
        &self.provider_code
    }

    /// Returns the hotel name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the star rating.
    #[inline]
    #[must_use]
    pub fn stars(&self) -> StarRating {
        self.stars
    }

    /// Returns the total price for the stay.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the board basis.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &BoardType {
        &self.board
    }

    /// Returns the check-in date.
    #[inline]
    #[must_use]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[inline]
    #[must_use]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the booking link.
    #[inline]
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the untouched vendor record.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }
}

impl CanonicalOffer for HotelOffer {
    type Key = HotelOfferKey;

    fn identity_key(&self) -> HotelOfferKey {
        HotelOfferKey {
            name: self.name.clone(),
            stars: self.stars,
            board: self.board.clone(),
        }
    }

    #[inline]
    fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for HotelOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HotelOffer({} {}* {} @ {})",
            self.name, self.stars, self.board, self.price
        )
    }
}
