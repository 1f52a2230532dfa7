//! # Deal Entity
//!
//! A matched flight and hotel pair with derived pricing.
//!
//! Deals are computed at match time from live offers and never cached; the
//! total and per-person prices are derived once, with checked arithmetic,
//! when the pair is formed.

use crate::domain::entities::{FlightOffer, HotelOffer};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package deal: one flight offer paired with one hotel offer.
///
/// # Invariants
///
/// - `total == round(flight.price + hotel.price, 2)`
/// - `per_person == round(total / adults, 2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// The flight component.
    flight: FlightOffer,
    /// The hotel component.
    hotel: HotelOffer,
    /// Combined price for all travellers, rounded to 2 dp.
    total: Price,
    /// Price per adult, rounded to 2 dp.
    per_person: Price,
    /// When this pairing was computed.
    computed_at: Timestamp,
}

impl Deal {
    /// Pairs a flight with a hotel and derives the package pricing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the price addition overflows or
    /// `adults` is zero.
    pub fn compute(flight: &FlightOffer, hotel: &HotelOffer, adults: u32) -> DomainResult<Self> {
        let total = flight.price().safe_add(hotel.price())?.round_2dp();
        let per_person = total.per_person(adults)?;
        Ok(Self {
            flight: flight.clone(),
            hotel: hotel.clone(),
            total,
            per_person,
            computed_at: Timestamp::now(),
        })
    }

    /// Returns the flight component.
    #[inline]
    #[must_use]
    pub fn flight(&self) -> &FlightOffer {
        &self.flight
    }

    /// Returns the hotel component.
    #[inline]
    #[must_use]
    pub fn hotel(&self) -> &HotelOffer {
        &self.hotel
    }

    /// Returns the combined price.
    #[inline]
    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// Returns the per-person price.
    #[inline]
    #[must_use]
    pub fn per_person(&self) -> Price {
        self.per_person
    }

    /// Returns when the pairing was computed.
    #[inline]
    #[must_use]
    pub fn computed_at(&self) -> Timestamp {
        self.computed_at
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deal({} + {}: {} total, {} pp)",
            self.flight.carrier(),
            self.hotel.name(),
            self.total,
            self.per_person
        )
    }
}
