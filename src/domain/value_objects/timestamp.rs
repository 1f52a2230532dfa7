//! # Timestamp Value Object
//!
//! DateTime wrapper with domain-specific methods.
//!
//! # Examples
//!
//! ```
//! use trip_deals::domain::value_objects::Timestamp;
//!
//! let now = Timestamp::now();
//! assert!(now.to_rfc3339().contains('T'));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>` so the crate has a single point-in-time
/// type. Used for deal computation times and search outcome stamps.
///
/// # Invariants
///
/// - Always in UTC timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a `chrono` datetime.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner datetime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Formats the timestamp as RFC 3339.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns true if this timestamp is after the other.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        let earlier = Timestamp::from_datetime(Utc::now());
        let later = Timestamp::from_datetime(earlier.as_datetime() + chrono::Duration::seconds(1));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
    }

    #[test]
    fn rfc3339_round_trip() {
        let ts = Timestamp::now();
        let parsed: DateTime<Utc> = ts.to_rfc3339().parse().unwrap();
        assert_eq!(Timestamp::from_datetime(parsed), ts);
    }
}
