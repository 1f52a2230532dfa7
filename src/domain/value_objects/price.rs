//! # Price Value Object
//!
//! Decimal money with checked arithmetic.
//!
//! This module provides the [`Price`] type used for all monetary values in
//! the crate. Prices are non-negative; zero is a valid sentinel meaning "the
//! provider did not report a price" and is filtered out at the matching
//! stage, not here.
//!
//! # Examples
//!
//! ```
//! use trip_deals::domain::value_objects::Price;
//!
//! let flight = Price::from_f64(120.50).unwrap();
//! let hotel = Price::from_f64(300.00).unwrap();
//! let total = flight.safe_add(hotel).unwrap();
//! let per_person = total.per_person(2).unwrap();
//!
//! assert_eq!(per_person.to_string(), "210.25");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so money never goes through binary floats.
/// All arithmetic is checked; overflow and division by zero surface as
/// [`DomainError::Arithmetic`].
///
/// # Invariants
///
/// - Never negative
/// - Zero means "unpriced" and is preserved through aggregation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used as a sentinel for missing vendor prices.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::invalid_price(format!(
                "price must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a price from an `f64`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative, NaN,
    /// or not representable as a decimal.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::invalid_price(format!("value {value} is not representable"))
        })?;
        Self::new(decimal)
    }

    /// Extracts a price from an optional JSON value, tolerantly.
    ///
    /// Accepts JSON numbers and numeric strings (vendors disagree on which
    /// they send). Anything absent, unparseable, or negative becomes
    /// [`Price::ZERO`].
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        let decimal = match value {
            Some(Value::Number(n)) => n
                .as_f64()
                .and_then(Decimal::from_f64)
                .unwrap_or(Decimal::ZERO),
            Some(Value::String(s)) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        };
        if decimal.is_sign_negative() {
            Self::ZERO
        } else {
            Self(decimal)
        }
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the price is the zero sentinel.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two prices with overflow checking.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn safe_add(self, other: Self) -> DomainResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(DomainError::arithmetic("price addition"))
    }

    /// Divides the price by the traveller count, rounded to two decimal
    /// places.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if `travellers` is zero.
    pub fn per_person(self, travellers: u32) -> DomainResult<Self> {
        Ok(Self(round_to_cents(self.per_person_exact(travellers)?.0)))
    }

    /// Divides the price by the traveller count without rounding.
    ///
    /// Ceiling tests use this: a quotient fractionally over a limit must
    /// not slip under it by rounding to cents first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if `travellers` is zero.
    pub fn per_person_exact(self, travellers: u32) -> DomainResult<Self> {
        if travellers == 0 {
            return Err(DomainError::arithmetic("per-person division"));
        }
        self.0
            .checked_div(Decimal::from(travellers))
            .map(Self)
            .ok_or(DomainError::arithmetic("per-person division"))
    }

    /// Returns the price rounded to exactly two decimal places.
    #[must_use]
    pub fn round_2dp(self) -> Self {
        Self(round_to_cents(self.0))
    }
}

/// Rounds to two decimal places and pads the scale, so derived money
/// always reads like money (`200.00`, not `200`).
fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_negative() {
        assert!(Price::from_f64(-1.0).is_err());
        assert!(Price::new(Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn zero_is_valid_sentinel() {
        let price = Price::ZERO;
        assert!(price.is_zero());
        assert!(!price.is_positive());
    }

    #[test]
    fn from_json_number() {
        let value = json!(189.4);
        assert_eq!(
            Price::from_json(Some(&value)),
            Price::from_f64(189.4).unwrap()
        );
    }

    #[test]
    fn from_json_numeric_string() {
        let value = json!("189.40");
        let price = Price::from_json(Some(&value));
        assert_eq!(price.get(), "189.40".parse::<Decimal>().unwrap());
    }

    #[test]
    fn from_json_garbage_is_zero() {
        assert!(Price::from_json(None).is_zero());
        assert!(Price::from_json(Some(&json!("n/a"))).is_zero());
        assert!(Price::from_json(Some(&json!({"amount": 5}))).is_zero());
        assert!(Price::from_json(Some(&json!(-3.5))).is_zero());
    }

    #[test]
    fn per_person_rounds_to_two_places() {
        let total = Price::from_f64(100.0).unwrap();
        let each = total.per_person(3).unwrap();
        assert_eq!(each.to_string(), "33.33");
    }

    #[test]
    fn per_person_zero_travellers_fails() {
        let total = Price::from_f64(100.0).unwrap();
        assert!(total.per_person(0).is_err());
        assert!(total.per_person_exact(0).is_err());
    }

    #[test]
    fn per_person_exact_keeps_full_quotient() {
        let total = Price::from_f64(750.01).unwrap();
        let exact = total.per_person_exact(3).unwrap();
        let ceiling = Price::from_f64(250.0).unwrap();
        // 250.0033... exceeds the ceiling even though it rounds to 250.00.
        assert!(exact > ceiling);
        assert_eq!(total.per_person(3).unwrap().to_string(), "250.00");
    }

    #[test]
    fn ordering_follows_decimal() {
        let a = Price::from_f64(10.0).unwrap();
        let b = Price::from_f64(10.5).unwrap();
        assert!(a < b);
    }

    proptest::proptest! {
        #[test]
        fn per_person_scales_back_within_rounding(
            cents in 0i64..10_000_000,
            travellers in 1u32..10,
        ) {
            let total = Price::new(Decimal::new(cents, 2)).unwrap();
            let each = total.per_person(travellers).unwrap();
            let back = each.get() * Decimal::from(travellers);
            let tolerance = Decimal::new(i64::from(travellers), 2);
            proptest::prop_assert!((back - total.get()).abs() <= tolerance);
        }

        #[test]
        fn from_json_is_never_negative(value in proptest::num::f64::ANY) {
            let price = Price::from_json(Some(&json!(value)));
            proptest::prop_assert!(!price.get().is_sign_negative());
        }
    }
}
