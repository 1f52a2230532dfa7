//! # Identity Value Objects
//!
//! String-based identifiers for provider adapters.
//!
//! # Examples
//!
//! ```
//! use trip_deals::domain::value_objects::ProviderId;
//!
//! let id = ProviderId::new("amadeus-flights");
//! assert_eq!(id.as_str(), "amadeus-flights");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a provider adapter.
///
/// Stable, lower-case slugs such as `amadeus-flights` or `booking-com`.
/// Used for fallback-chain ordering, logging, and failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a new provider ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_as_str() {
        let id = ProviderId::new("kiwi");
        assert_eq!(id.as_str(), "kiwi");
        assert_eq!(id.to_string(), "kiwi");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ProviderId::new("kiwi"));
        assert!(set.contains(&ProviderId::new("kiwi")));
        assert!(!set.contains(&ProviderId::new("amadeus-flights")));
    }
}
