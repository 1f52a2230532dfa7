//! # Star Rating Value Object
//!
//! Hotel star rating with tolerant vendor normalization.
//!
//! Vendors report star ratings as integers, floats, numeric strings, or
//! word tokens like `"FOUR_STAR"`. [`StarRating::from_json`] folds all of
//! those into a 0-5 integer, where 0 means the rating is unknown.
//!
//! # Examples
//!
//! ```
//! use trip_deals::domain::value_objects::StarRating;
//! use serde_json::json;
//!
//! assert_eq!(StarRating::from_json(Some(&json!("FOUR_STAR"))).get(), 4);
//! assert_eq!(StarRating::from_json(Some(&json!(4.0))).get(), 4);
//! assert_eq!(StarRating::from_json(Some(&json!("3"))).get(), 3);
//! assert_eq!(StarRating::from_json(None).get(), 0);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A hotel star rating in the range 0-5.
///
/// Zero means "unknown"; unknown ratings fail any minimum-stars filter
/// above zero rather than being treated as wildcards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// The unknown rating.
    pub const UNKNOWN: Self = Self(0);

    /// Creates a star rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStarRating` if `value > 5`.
    pub fn new(value: u8) -> DomainResult<Self> {
        if value > 5 {
            return Err(DomainError::InvalidStarRating {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Normalizes a vendor-supplied JSON rating.
    ///
    /// Accepted shapes, in order:
    /// - integer or float (floats truncate toward zero)
    /// - numeric string (`"3"`, `"4.0"`)
    /// - word token containing ONE/TWO/THREE/FOUR/FIVE (`"FOUR_STAR"`)
    ///
    /// Anything else, including values outside 0-5, normalizes to
    /// [`StarRating::UNKNOWN`].
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        let raw = match value {
            Some(Value::Number(n)) => n.as_f64().map(|f| f.trunc() as i64),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if let Ok(int) = trimmed.parse::<i64>() {
                    Some(int)
                } else if let Ok(float) = trimmed.parse::<f64>() {
                    Some(float.trunc() as i64)
                } else {
                    Some(Self::from_word_token(trimmed))
                }
            }
            _ => None,
        };
        match raw {
            Some(v @ 0..=5) => Self(v as u8),
            _ => Self::UNKNOWN,
        }
    }

    /// Maps word tokens like `FOUR_STAR` or `ThreeStar` to 1-5, else 0.
    fn from_word_token(token: &str) -> i64 {
        let upper = token.to_uppercase();
        for (word, stars) in [
            ("FIVE", 5),
            ("FOUR", 4),
            ("THREE", 3),
            ("TWO", 2),
            ("ONE", 1),
        ] {
            if upper.contains(word) {
                return stars;
            }
        }
        0
    }

    /// Returns the rating as an integer.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Returns true if the rating is known (non-zero).
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if this rating meets the given minimum.
    #[inline]
    #[must_use]
    pub fn at_least(&self, minimum: Self) -> bool {
        self.0 >= minimum.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
