//! # Search Request Entity
//!
//! Validated trip search parameters.
//!
//! A [`SearchRequest`] is the single input to the whole pipeline: every
//! provider adapter, the aggregator, and the matcher read from it. It is
//! immutable once built.
//!
//! # Examples
//!
//! ```
//! use trip_deals::domain::entities::SearchRequest;
//! use chrono::NaiveDate;
//!
//! let request = SearchRequest::builder("LHR", "PMI", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
//!     .nights(5)
//!     .adults(2)
//!     .min_stars(4)
//!     .board("HB")
//!     .budget_per_person(250.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.adults(), 2);
//! assert_eq!(request.check_out().to_string(), "2026-09-06");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Price, StarRating};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_currency() -> String {
    "GBP".to_string()
}

/// Trip search parameters.
///
/// # Invariants
///
/// - `adults >= 1` (per-person division is always defined)
/// - `origin` and `destination` are non-empty IATA-style codes, upper-cased
/// - `min_stars` is 0-5
///
/// A start date in the past is allowed (some vendors accept it); callers
/// can check [`SearchRequest::starts_in_past`] and warn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Origin airport/city code.
    origin: String,
    /// Destination airport/city code.
    destination: String,
    /// Outbound date.
    start_date: NaiveDate,
    /// Number of nights; the return date is `start_date + nights`.
    #[serde(default)]
    nights: u32,
    /// Number of adult travellers.
    adults: u32,
    /// Number of child travellers.
    #[serde(default)]
    children: u32,
    /// ISO currency code for offer prices.
    #[serde(default = "default_currency")]
    currency: String,
    /// Minimum acceptable hotel star rating.
    #[serde(default)]
    min_stars: StarRating,
    /// Board basis filter, matched by case-insensitive substring.
    #[serde(default)]
    board: String,
    /// Per-person budget ceiling; zero means nothing can match.
    #[serde(default)]
    budget_per_person: Price,
}

impl SearchRequest {
    /// Starts building a request from the three mandatory fields.
    #[must_use]
    pub fn builder(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
    ) -> SearchRequestBuilder {
        SearchRequestBuilder::new(origin, destination, start_date)
    }

    /// Validates the request invariants.
    ///
    /// Built requests are already valid; this re-checks requests that came
    /// in through deserialization.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` when an invariant is violated.
    pub fn validate(&self) -> DomainResult<()> {
        if self.origin.trim().is_empty() {
            return Err(DomainError::invalid_request("origin must not be empty"));
        }
        if self.destination.trim().is_empty() {
            return Err(DomainError::invalid_request(
                "destination must not be empty",
            ));
        }
        if self.adults == 0 {
            return Err(DomainError::invalid_request("adults must be at least 1"));
        }
        Ok(())
    }

    /// Returns the origin code.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination code.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the outbound date.
    #[inline]
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the number of nights.
    #[inline]
    #[must_use]
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Returns the check-out / return date (`start_date + nights`).
    #[must_use]
    pub fn check_out(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.nights)))
            .unwrap_or(self.start_date)
    }

    /// Returns the number of adults.
    #[inline]
    #[must_use]
    pub fn adults(&self) -> u32 {
        self.adults
    }

    /// Returns the number of children.
    #[inline]
    #[must_use]
    pub fn children(&self) -> u32 {
        self.children
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the minimum star rating filter.
    #[inline]
    #[must_use]
    pub fn min_stars(&self) -> StarRating {
        self.min_stars
    }

    /// Returns the board basis filter string.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &str {
        &self.board
    }

    /// Returns the per-person budget ceiling.
    #[inline]
    #[must_use]
    pub fn budget_per_person(&self) -> Price {
        self.budget_per_person
    }

    /// Returns true if the outbound date is before today (UTC).
    #[must_use]
    pub fn starts_in_past(&self) -> bool {
        self.start_date < Utc::now().date_naive()
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchRequest({} -> {} on {}, {} nights, {} adults)",
            self.origin, self.destination, self.start_date, self.nights, self.adults
        )
    }
}

/// Builder for [`SearchRequest`].
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    origin: String,
    destination: String,
    start_date: NaiveDate,
    nights: u32,
    adults: u32,
    children: u32,
    currency: String,
    min_stars: u8,
    board: String,
    budget_per_person: f64,
}

impl SearchRequestBuilder {
    /// Creates a builder with the mandatory fields and sensible defaults
    /// (1 night, 1 adult, GBP, no filters).
    #[must_use]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            start_date,
            nights: 1,
            adults: 1,
            children: 0,
            currency: default_currency(),
            min_stars: 0,
            board: String::new(),
            budget_per_person: 0.0,
        }
    }

    /// Sets the number of nights.
    #[must_use]
    pub fn nights(mut self, nights: u32) -> Self {
        self.nights = nights;
        self
    }

    /// Sets the number of adults.
    #[must_use]
    pub fn adults(mut self, adults: u32) -> Self {
        self.adults = adults;
        self
    }

    /// Sets the number of children.
    #[must_use]
    pub fn children(mut self, children: u32) -> Self {
        self.children = children;
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the minimum star rating.
    #[must_use]
    pub fn min_stars(mut self, stars: u8) -> Self {
        self.min_stars = stars;
        self
    }

    /// Sets the board basis filter.
    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = board.into();
        self
    }

    /// Sets the per-person budget ceiling.
    #[must_use]
    pub fn budget_per_person(mut self, budget: f64) -> Self {
        self.budget_per_person = budget;
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRequest` for empty airport codes or
    /// zero adults, `DomainError::InvalidStarRating` for stars above 5,
    /// and `DomainError::InvalidPrice` for a negative budget.
    pub fn build(self) -> DomainResult<SearchRequest> {
        let request = SearchRequest {
            origin: self.origin.trim().to_uppercase(),
            destination: self.destination.trim().to_uppercase(),
            start_date: self.start_date,
            nights: self.nights,
            adults: self.adults,
            children: self.children,
            currency: self.currency.trim().to_uppercase(),
            min_stars: StarRating::new(self.min_stars)?,
            board: self.board,
            budget_per_person: Price::from_f64(self.budget_per_person)?,
        };
        request.validate()?;
        Ok(request)
    }
}
