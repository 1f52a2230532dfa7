//! # Offer Aggregation
//!
//! Cross-provider merge and deduplication for one offer category.
//!
//! The same inventory often comes back from several providers at slightly
//! different prices. [`merge`] concatenates the per-provider batches,
//! sorts ascending by price with a stable sort, and keeps the first (and
//! therefore cheapest) occurrence of each identity key.
//!
//! Zero-price sentinels are not filtered here; that is a matching-stage
//! concern.

use crate::domain::entities::CanonicalOffer;
use std::collections::HashSet;

/// Merges per-provider offer batches into one deduplicated, price-sorted
/// list.
///
/// Properties:
/// - Output is ascending by price; ties keep their input order.
/// - For duplicate identity keys, the cheapest occurrence wins.
/// - Idempotent: merging the output with itself changes nothing.
#[must_use]
pub fn merge<O: CanonicalOffer>(batches: Vec<Vec<O>>) -> Vec<O> {
    let mut offers: Vec<O> = batches.into_iter().flatten().collect();
    offers.sort_by_key(CanonicalOffer::price);

    let mut seen = HashSet::new();
    offers.retain(|offer| seen.insert(offer.identity_key()));
    offers
}
