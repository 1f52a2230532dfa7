//! # Deal Matching
//!
//! Cross-product pairing of flights and hotels into ranked package deals.
//!
//! Every flight is considered against every hotel. A pair survives when:
//!
//! - both prices are strictly positive (zero means "unpriced"),
//! - the hotel meets the minimum star rating,
//! - the hotel board contains the requested board token
//!   (case-insensitive),
//! - the exact per-person quotient is within budget; rounding to cents
//!   happens only on the emitted deal.
//!
//! Survivors are sorted ascending by per-person price with a stable sort,
//! so equal-priced deals keep their input order.

use crate::domain::entities::{Deal, FlightOffer, HotelOffer, SearchRequest};
use tracing::debug;

/// Matches aggregated offers into ranked deals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealMatcher;

impl DealMatcher {
    /// Creates a matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Pairs flights with hotels and ranks the survivors.
    ///
    /// Empty inputs or a zero budget simply yield an empty list; matching
    /// itself never fails.
    #[must_use]
    pub fn match_deals(
        &self,
        flights: &[FlightOffer],
        hotels: &[HotelOffer],
        request: &SearchRequest,
    ) -> Vec<Deal> {
        let mut deals = Vec::new();

        for flight in flights {
            if !flight.price().is_positive() {
                continue;
            }
            for hotel in hotels {
                if !hotel.price().is_positive() {
                    continue;
                }
                if !hotel.stars().at_least(request.min_stars()) {
                    continue;
                }
                if !hotel.board().matches(request.board()) {
                    continue;
                }

                // Budget is tested on the unrounded quotient; a pair
                // fractionally over budget must not slip in by rounding.
                let quotient = flight
                    .price()
                    .safe_add(hotel.price())
                    .and_then(|total| total.per_person_exact(request.adults()));
                let per_person = match quotient {
                    Ok(price) => price,
                    Err(error) => {
                        debug!(%error, "skipping pair with failed price arithmetic");
                        continue;
                    }
                };
                if per_person > request.budget_per_person() {
                    continue;
                }

                let deal = match Deal::compute(flight, hotel, request.adults()) {
                    Ok(deal) => deal,
                    Err(error) => {
                        debug!(%error, "skipping pair with failed price arithmetic");
                        continue;
                    }
                };
                deals.push(deal);
            }
        }

        deals.sort_by_key(Deal::per_person);
        deals
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BoardType, Price, ProviderId, StarRating};
    use chrono::NaiveDate;

    fn request(min_stars: u8, board: &str, budget: f64) -> SearchRequest {
        SearchRequest::builder("AAA", "BBB", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .nights(5)
            .adults(2)
            .min_stars(min_stars)
            .board(board)
            .budget_per_person(budget)
            .build()
            .unwrap()
    }

    fn flight(price: f64) -> FlightOffer {
        FlightOffer::new(
            "stub",
            ProviderId::new("stub"),
            Price::from_f64(price).unwrap(),
            "BA",
        )
    }

    fn hotel(name: &str, stars: u8, board: &str, price: f64) -> HotelOffer {
        HotelOffer::new(
            "stub",
            ProviderId::new("stub"),
            name,
            Price::from_f64(price).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 6).unwrap(),
        )
        .with_stars(StarRating::new(stars).unwrap())
        .with_board(BoardType::new(board))
    }

    #[test]
    fn filters_and_sorts_by_per_person() {
        let flights = vec![flight(100.0), flight(200.0)];
        let hotels = vec![
            hotel("Hotel1", 5, "HB", 300.0),
            hotel("Hotel2", 5, "HB", 500.0),
            hotel("Hotel3", 3, "HB", 100.0), // too few stars
            hotel("Hotel4", 4, "BB", 100.0), // wrong board
        ];

        let deals = DealMatcher::new().match_deals(&flights, &hotels, &request(4, "HB", 250.0));

        // Only Hotel1 pairs fit: (100+300)/2=200 and (200+300)/2=250.
        assert_eq!(deals.len(), 2);
        assert!(deals.iter().all(|d| d.hotel().name() == "Hotel1"));
        assert_eq!(deals[0].per_person().to_string(), "200.00");
        assert_eq!(deals[1].per_person().to_string(), "250.00");
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        let deals = DealMatcher::new().match_deals(
            &[flight(100.0)],
            &[hotel("H", 4, "HB", 400.0)],
            &request(0, "", 250.0),
        );
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].per_person().to_string(), "250.00");

        let over = DealMatcher::new().match_deals(
            &[flight(100.02)],
            &[hotel("H", 4, "HB", 400.0)],
            &request(0, "", 250.0),
        );
        assert!(over.is_empty());
    }

    #[test]
    fn budget_test_uses_exact_quotient() {
        let req = SearchRequest::builder("AAA", "BBB", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .nights(5)
            .adults(3)
            .budget_per_person(250.0)
            .build()
            .unwrap();

        // 750.01 / 3 = 250.0033... is over budget even though it rounds
        // to 250.00.
        let over =
            DealMatcher::new().match_deals(&[flight(350.01)], &[hotel("H", 4, "HB", 400.0)], &req);
        assert!(over.is_empty());

        // 750.00 / 3 lands exactly on the ceiling and stays in.
        let exact =
            DealMatcher::new().match_deals(&[flight(350.0)], &[hotel("H", 4, "HB", 400.0)], &req);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].per_person().to_string(), "250.00");
    }

    #[test]
    fn board_match_is_substring_case_insensitive() {
        let deals = DealMatcher::new().match_deals(
            &[flight(100.0)],
            &[hotel("H", 4, "HB_HALF_BOARD", 100.0)],
            &request(0, "hb", 500.0),
        );
        assert_eq!(deals.len(), 1);
    }

    #[test]
    fn unpriced_offers_are_rejected() {
        let zero_flight = FlightOffer::new("stub", ProviderId::new("stub"), Price::ZERO, "BA");
        let deals = DealMatcher::new().match_deals(
            &[zero_flight],
            &[hotel("H", 5, "HB", 100.0)],
            &request(0, "", 1000.0),
        );
        assert!(deals.is_empty());
    }

    #[test]
    fn zero_budget_matches_nothing() {
        let deals = DealMatcher::new().match_deals(
            &[flight(100.0)],
            &[hotel("H", 5, "HB", 100.0)],
            &request(0, "", 0.0),
        );
        assert!(deals.is_empty());
    }

    #[test]
    fn unknown_stars_fail_minimum() {
        let unknown = HotelOffer::new(
            "stub",
            ProviderId::new("stub"),
            "H",
            Price::from_f64(100.0).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 6).unwrap(),
        );
        let deals =
            DealMatcher::new().match_deals(&[flight(100.0)], &[unknown], &request(4, "", 1000.0));
        assert!(deals.is_empty());
    }

    #[test]
    fn empty_inputs_yield_empty() {
        let matcher = DealMatcher::new();
        assert!(matcher
            .match_deals(&[], &[hotel("H", 5, "HB", 100.0)], &request(0, "", 100.0))
            .is_empty());
        assert!(matcher
            .match_deals(&[flight(100.0)], &[], &request(0, "", 100.0))
            .is_empty());
    }

    proptest::proptest! {
        #[test]
        fn deals_are_bounded_ranked_and_within_budget(
            flight_cents in proptest::collection::vec(0u32..50_000, 0..8),
            hotel_cents in proptest::collection::vec(0u32..50_000, 0..8),
            budget_cents in 0u32..100_000,
        ) {
            let flights: Vec<FlightOffer> = flight_cents
                .iter()
                .map(|c| flight(f64::from(*c) / 100.0))
                .collect();
            let hotels: Vec<HotelOffer> = hotel_cents
                .iter()
                .enumerate()
                .map(|(i, c)| hotel(&format!("H{i}"), 4, "HB", f64::from(*c) / 100.0))
                .collect();
            let req = request(0, "", f64::from(budget_cents) / 100.0);

            let deals = DealMatcher::new().match_deals(&flights, &hotels, &req);
            proptest::prop_assert!(deals.len() <= flights.len() * hotels.len());
            proptest::prop_assert!(deals
                .windows(2)
                .all(|w| w[0].per_person() <= w[1].per_person()));
            proptest::prop_assert!(deals
                .iter()
                .all(|d| d.per_person() <= req.budget_per_person()));
        }
    }
}
