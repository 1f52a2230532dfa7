//! # Board Basis Value Object
//!
//! Hotel board basis token with case-insensitive filter matching.
//!
//! Vendors send anything from `"HALF_BOARD"` to `"HB"` to nothing at all.
//! The token is kept as the vendor sent it, upper-cased; request filters
//! match by case-insensitive substring containment so `"HB"` matches
//! `"HB_HALF_BOARD"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hotel board basis token (BB, HB, FB, AI, ...), upper-cased.
///
/// Empty or absent vendor values normalize to [`BoardType::UNKNOWN_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardType(String);

impl BoardType {
    /// Token used when the vendor did not report a board basis.
    pub const UNKNOWN_TOKEN: &'static str = "UNKNOWN";

    /// Creates a board type, trimming and upper-casing the token.
    ///
    /// An empty token becomes [`BoardType::unknown`].
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into().trim().to_uppercase();
        if token.is_empty() {
            Self::unknown()
        } else {
            Self(token)
        }
    }

    /// Creates the unknown board type.
    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN_TOKEN.to_string())
    }

    /// Creates a board type from an optional vendor string.
    #[must_use]
    pub fn from_option(token: Option<&str>) -> Self {
        match token {
            Some(t) => Self::new(t),
            None => Self::unknown(),
        }
    }

    /// Returns the token as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the vendor did not report a board basis.
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN_TOKEN
    }

    /// Returns true if this board satisfies the request filter.
    ///
    /// Matching is case-insensitive substring containment; an empty filter
    /// matches everything.
    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.trim().to_uppercase();
        filter.is_empty() || self.0.contains(&filter)
    }
}

impl Default for BoardType {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases() {
        assert_eq!(BoardType::new("half_board").as_str(), "HALF_BOARD");
        assert_eq!(BoardType::new("  hb ").as_str(), "HB");
    }

    #[test]
    fn empty_becomes_unknown() {
        assert!(BoardType::new("").is_unknown());
        assert!(BoardType::new("   ").is_unknown());
        assert!(BoardType::from_option(None).is_unknown());
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let board = BoardType::new("HB_HALF_BOARD");
        assert!(board.matches("hb"));
        assert!(board.matches("HALF"));
        assert!(!board.matches("AI"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(BoardType::unknown().matches(""));
        assert!(BoardType::new("BB").matches("  "));
    }
}
