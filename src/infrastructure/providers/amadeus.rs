//! # Amadeus Adapters
//!
//! Amadeus Self-Service API integration: OAuth2 authentication, flight
//! offers search, and the two-step hotel search.
//!
//! Authentication uses the client-credentials grant. The bearer token is
//! shared between the flight and hotel adapters through [`AmadeusAuth`] and
//! cached until shortly before expiry; a 401 on a search triggers exactly
//! one invalidate-and-retry.
//!
//! The hotel search is two calls: `hotels/by-city` to collect hotel IDs,
//! then `hotel-offers` for those IDs. The city lookup progressively loosens
//! its parameters (radius 30 then 20, then without `hotelSource`, then
//! without the page limit) because the test environment rejects some
//! combinations for some cities.

use crate::domain::entities::{FlightOffer, HotelOffer, SearchRequest};
use crate::domain::value_objects::{BoardType, Price, ProviderId, StarRating};
use crate::infrastructure::config::AmadeusSettings;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::{bearer_headers, HttpClient};
use crate::infrastructure::providers::token_cache::{BearerToken, TokenCache};
use crate::infrastructure::providers::traits::ProviderAdapter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
const HOTELS_BY_CITY_PATH: &str = "/v1/reference-data/locations/hotels/by-city";
const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";

/// Hotel-offers URLs get unwieldy, so only this many IDs go in one call.
const MAX_HOTEL_IDS: usize = 20;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Shared Amadeus OAuth2 authenticator.
///
/// One instance is shared by [`AmadeusFlights`] and [`AmadeusHotels`] so
/// both ride the same cached token.
#[derive(Debug)]
pub struct AmadeusAuth {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    api_secret: Option<String>,
    cache: TokenCache,
}

impl AmadeusAuth {
    /// Creates an authenticator from settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &AmadeusSettings) -> ProviderResult<Self> {
        Ok(Self {
            http: HttpClient::new(settings.timeout_ms)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
            cache: TokenCache::new(),
        })
    }

    /// Returns true if both OAuth2 credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Returns a valid bearer token, exchanging credentials if needed.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingCredentials` if credentials are not
    /// configured, or `ProviderError::Unavailable` when the exchange fails.
    /// A failed exchange is a hard error: without a token neither Amadeus
    /// adapter can do anything.
    pub async fn bearer_token(&self) -> ProviderResult<String> {
        let (key, secret) = match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) => (key, secret),
            _ => {
                return Err(ProviderError::missing_credentials(ProviderId::new(
                    "amadeus",
                )))
            }
        };

        self.cache
            .get_or_refresh(|| self.request_token(key, secret))
            .await
            .map_err(|e| ProviderError::unavailable(ProviderId::new("amadeus"), e.to_string()))
    }

    /// Drops the cached token so the next call re-authenticates.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    async fn request_token(&self, key: &str, secret: &str) -> ProviderResult<BearerToken> {
        info!("authenticating with Amadeus");
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", key),
            ("client_secret", secret),
        ];
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        let response: TokenResponse = self.http.post_form(&url, &form).await?;
        Ok(BearerToken::new(
            response.access_token,
            response.expires_in,
        ))
    }
}

/// Query parameters for the flight-offers search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlightQuery {
    origin_location_code: String,
    destination_location_code: String,
    departure_date: String,
    return_date: String,
    adults: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<u32>,
    currency_code: String,
    max: u32,
}

#[derive(Debug, Deserialize)]
struct FlightOffersResponse {
    #[serde(default)]
    data: Vec<Value>,
}

/// Typed view of one flight-offers record; everything optional so a partial
/// record degrades instead of failing the whole response.
#[derive(Debug, Deserialize)]
struct RawFlightOffer {
    #[serde(default)]
    price: RawFlightPrice,
    #[serde(default)]
    itineraries: Vec<RawItinerary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlightPrice {
    grand_total: Option<String>,
    total: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawItinerary {
    #[serde(default)]
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSegment {
    departure: Option<RawWaypoint>,
    arrival: Option<RawWaypoint>,
    carrier_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWaypoint {
    at: Option<String>,
}

/// Amadeus flight offers adapter (round trip).
#[derive(Debug)]
pub struct AmadeusFlights {
    id: ProviderId,
    auth: Arc<AmadeusAuth>,
    http: HttpClient,
    base_url: String,
    max_results: u32,
}

impl AmadeusFlights {
    /// Creates the adapter, sharing the given authenticator.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &AmadeusSettings, auth: Arc<AmadeusAuth>) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("amadeus-flights"),
            auth,
            http: HttpClient::new(settings.timeout_ms)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            max_results: settings.max_results,
        })
    }

    fn build_query(&self, request: &SearchRequest) -> FlightQuery {
        FlightQuery {
            origin_location_code: request.origin().to_string(),
            destination_location_code: request.destination().to_string(),
            departure_date: request.start_date().to_string(),
            return_date: request.check_out().to_string(),
            adults: request.adults(),
            children: (request.children() > 0).then_some(request.children()),
            currency_code: request.currency().to_string(),
            max: self.max_results,
        }
    }

    fn map_offer(&self, value: &Value) -> Option<FlightOffer> {
        let raw: RawFlightOffer = serde_json::from_value(value.clone()).ok()?;

        let outbound = raw.itineraries.first();
        let inbound = raw.itineraries.last();
        let first_segment = outbound.and_then(|i| i.segments.first());
        let last_segment = inbound
            .and_then(|i| i.segments.last())
            .or_else(|| outbound.and_then(|i| i.segments.last()));

        let carrier = first_segment
            .and_then(|s| s.carrier_code.clone())
            .unwrap_or_else(|| "?".to_string());
        let departure = first_segment
            .and_then(|s| s.departure.as_ref())
            .and_then(|w| w.at.clone());
        let arrival = last_segment
            .and_then(|s| s.arrival.as_ref())
            .and_then(|w| w.at.clone());
        let stops = outbound.map_or(0, |i| i.segments.len().saturating_sub(1) as u32);

        let price_text = raw.price.grand_total.or(raw.price.total);
        let price = Price::from_json(price_text.map(Value::String).as_ref());

        Some(
            FlightOffer::new("Amadeus Flights", self.id.clone(), price, carrier)
                .with_times(departure, arrival)
                .with_stops(stops)
                .with_raw(value.clone()),
        )
    }
}

#[async_trait]
impl ProviderAdapter for AmadeusFlights {
    type Offer = FlightOffer;

    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<Vec<FlightOffer>> {
        if !self.auth.has_credentials() {
            debug!(provider = %self.id, "credentials not configured, skipping");
            return Ok(Vec::new());
        }

        let query = self.build_query(request);
        let url = format!("{}{}", self.base_url, FLIGHT_OFFERS_PATH);

        let token = self.auth.bearer_token().await?;
        let result: ProviderResult<FlightOffersResponse> = self
            .http
            .get_with_params_and_headers(&url, &query, bearer_headers(&token)?)
            .await;

        let response = match result {
            Ok(response) => response,
            // Stale token: refresh once and retry.
            Err(e) if e.is_credential_error() => {
                warn!(provider = %self.id, error = %e, "token rejected, refreshing once");
                self.auth.invalidate().await;
                let token = self.auth.bearer_token().await?;
                self.http
                    .get_with_params_and_headers(&url, &query, bearer_headers(&token)?)
                    .await?
            }
            Err(e) => return Err(e),
        };

        let offers: Vec<FlightOffer> = response
            .data
            .iter()
            .filter_map(|value| self.map_offer(value))
            .collect();
        info!(provider = %self.id, count = offers.len(), "flight offers mapped");
        Ok(offers)
    }
}

#[derive(Debug, Deserialize)]
struct HotelListResponse {
    #[serde(default)]
    data: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct HotelOffersResponse {
    #[serde(default)]
    data: Vec<Value>,
}

/// Amadeus hotel offers adapter.
#[derive(Debug)]
pub struct AmadeusHotels {
    id: ProviderId,
    auth: Arc<AmadeusAuth>,
    http: HttpClient,
    base_url: String,
}

impl AmadeusHotels {
    /// Creates the adapter, sharing the given authenticator.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &AmadeusSettings, auth: Arc<AmadeusAuth>) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("amadeus-hotels"),
            auth,
            http: HttpClient::new(settings.timeout_ms)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Collects hotel IDs for the destination city, loosening the lookup
    /// parameters until an attempt yields data.
    async fn lookup_hotel_ids(&self, city: &str, token: &str) -> ProviderResult<Vec<String>> {
        let url = format!("{}{}", self.base_url, HOTELS_BY_CITY_PATH);
        let attempts: [(u32, bool, bool); 4] = [
            (30, true, true),
            (20, true, true),
            (20, false, true),
            (20, false, false),
        ];

        for (radius, use_source, use_limit) in attempts {
            let mut params: Vec<(&str, String)> = vec![
                ("cityCode", city.to_string()),
                ("radius", radius.to_string()),
                ("radiusUnit", "KM".to_string()),
            ];
            if use_source {
                params.push(("hotelSource", "ALL".to_string()));
            }
            if use_limit {
                params.push(("page[limit]", "50".to_string()));
            }

            let result: ProviderResult<HotelListResponse> = self
                .http
                .get_with_params_and_headers(&url, &params, bearer_headers(token)?)
                .await;

            match result {
                Ok(response) => {
                    let ids: Vec<String> = response
                        .data
                        .iter()
                        .filter_map(|h| h.get("hotelId").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect();
                    if !ids.is_empty() {
                        debug!(
                            provider = %self.id,
                            city,
                            radius,
                            use_source,
                            use_limit,
                            count = ids.len(),
                            "hotel list lookup succeeded"
                        );
                        return Ok(ids);
                    }
                }
                Err(e) => {
                    warn!(
                        provider = %self.id,
                        city,
                        radius,
                        use_source,
                        use_limit,
                        error = %e,
                        "hotel list lookup attempt failed"
                    );
                }
            }
        }

        Ok(Vec::new())
    }

    fn map_item(&self, item: &Value, request: &SearchRequest) -> Vec<HotelOffer> {
        let hotel = item.get("hotel");
        let name = hotel
            .and_then(|h| h.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(HotelOffer::UNKNOWN_NAME);
        let rating = hotel.and_then(|h| {
            h.get("rating")
                .or_else(|| h.get("stars"))
                .or_else(|| h.get("category"))
        });
        let stars = StarRating::from_json(rating);
        let link = item
            .pointer("/hotel/contact/uri")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let offers = item
            .get("offers")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        offers
            .iter()
            .map(|offer| {
                let board_token = offer
                    .get("boardType")
                    .or_else(|| offer.pointer("/mealPlan/code"))
                    .or_else(|| offer.pointer("/mealPlan/type"))
                    .and_then(Value::as_str);
                let price = Price::from_json(offer.pointer("/price/total"));

                HotelOffer::new(
                    "Amadeus Hotels",
                    self.id.clone(),
                    name,
                    price,
                    request.start_date(),
                    request.check_out(),
                )
                .with_stars(stars)
                .with_board(BoardType::from_option(board_token))
                .with_link(link)
                .with_raw(item.clone())
            })
            .collect()
    }
}

#[async_trait]
impl ProviderAdapter for AmadeusHotels {
    type Offer = HotelOffer;

    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<Vec<HotelOffer>> {
        if !self.auth.has_credentials() {
            debug!(provider = %self.id, "credentials not configured, skipping");
            return Ok(Vec::new());
        }

        let token = self.auth.bearer_token().await?;
        let hotel_ids = self
            .lookup_hotel_ids(request.destination(), &token)
            .await?;
        if hotel_ids.is_empty() {
            info!(provider = %self.id, city = request.destination(), "no hotels found for city");
            return Ok(Vec::new());
        }

        let batch: Vec<&str> = hotel_ids
            .iter()
            .take(MAX_HOTEL_IDS)
            .map(String::as_str)
            .collect();
        let params = [
            ("hotelIds", batch.join(",")),
            ("checkInDate", request.start_date().to_string()),
            ("checkOutDate", request.check_out().to_string()),
            ("adults", request.adults().to_string()),
            ("roomQuantity", "1".to_string()),
            ("currency", request.currency().to_string()),
        ];
        let url = format!("{}{}", self.base_url, HOTEL_OFFERS_PATH);

        let result: ProviderResult<HotelOffersResponse> = self
            .http
            .get_with_params_and_headers(&url, &params, bearer_headers(&token)?)
            .await;

        let response = match result {
            Ok(response) => response,
            // Stale token: refresh once and retry.
            Err(e) if e.is_credential_error() => {
                warn!(provider = %self.id, error = %e, "token rejected, refreshing once");
                self.auth.invalidate().await;
                let token = self.auth.bearer_token().await?;
                self.http
                    .get_with_params_and_headers(&url, &params, bearer_headers(&token)?)
                    .await?
            }
            Err(e) => return Err(e),
        };

        let offers: Vec<HotelOffer> = response
            .data
            .iter()
            .flat_map(|item| self.map_item(item, request))
            .collect();
        info!(provider = %self.id, count = offers.len(), "hotel offers mapped");
        Ok(offers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn request() -> SearchRequest {
        SearchRequest::builder("EMA", "ALC", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .nights(4)
            .adults(2)
            .build()
            .unwrap()
    }

    fn flights_adapter() -> AmadeusFlights {
        let settings = AmadeusSettings::default();
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        AmadeusFlights::new(&settings, auth).unwrap()
    }

    fn hotels_adapter() -> AmadeusHotels {
        let settings = AmadeusSettings::default();
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        AmadeusHotels::new(&settings, auth).unwrap()
    }

    #[test]
    fn flight_query_includes_children_only_when_present() {
        let adapter = flights_adapter();
        let query = adapter.build_query(&request());
        assert_eq!(query.children, None);
        assert_eq!(query.return_date, "2026-09-05");
        assert_eq!(query.currency_code, "GBP");
    }

    #[test]
    fn maps_flight_offer_fields() {
        let adapter = flights_adapter();
        let value = json!({
            "price": {"grandTotal": "189.40"},
            "itineraries": [
                {"segments": [
                    {"departure": {"at": "2026-09-01T07:30:00"},
                     "arrival": {"at": "2026-09-01T09:00:00"},
                     "carrierCode": "FR"},
                    {"departure": {"at": "2026-09-01T10:00:00"},
                     "arrival": {"at": "2026-09-01T11:30:00"},
                     "carrierCode": "FR"}
                ]},
                {"segments": [
                    {"departure": {"at": "2026-09-05T18:00:00"},
                     "arrival": {"at": "2026-09-05T19:30:00"},
                     "carrierCode": "FR"}
                ]}
            ]
        });

        let offer = adapter.map_offer(&value).unwrap();
        assert_eq!(offer.carrier(), "FR");
        assert_eq!(offer.departure(), Some("2026-09-01T07:30:00"));
        assert_eq!(offer.arrival(), Some("2026-09-05T19:30:00"));
        assert_eq!(offer.stops(), 1);
        assert_eq!(offer.price().to_string(), "189.40");
        assert!(offer.raw().is_some());
    }

    #[test]
    fn empty_flight_record_maps_with_sentinels() {
        let adapter = flights_adapter();
        let offer = adapter.map_offer(&json!({})).unwrap();
        assert_eq!(offer.carrier(), "?");
        assert!(offer.price().is_zero());
        assert_eq!(offer.departure(), None);
    }

    #[test]
    fn maps_one_hotel_offer_per_room_offer() {
        let adapter = hotels_adapter();
        let item = json!({
            "hotel": {
                "name": "Hotel Playa",
                "rating": "FOUR_STAR",
                "contact": {"uri": "https://example.com/playa"}
            },
            "offers": [
                {"boardType": "HALF_BOARD", "price": {"total": "300.00"}},
                {"mealPlan": {"code": "BB"}, "price": {"total": "260.00"}}
            ]
        });

        let offers = adapter.map_item(&item, &request());
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].name(), "Hotel Playa");
        assert_eq!(offers[0].stars().get(), 4);
        assert_eq!(offers[0].board().as_str(), "HALF_BOARD");
        assert_eq!(offers[1].board().as_str(), "BB");
        assert_eq!(offers[0].link(), "https://example.com/playa");
        assert_eq!(
            offers[0].check_out(),
            NaiveDate::from_ymd_opt(2026, 9, 5).unwrap()
        );
    }

    #[test]
    fn hotel_item_without_offers_maps_to_nothing() {
        let adapter = hotels_adapter();
        let offers = adapter.map_item(&json!({"hotel": {"name": "X"}}), &request());
        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn search_without_credentials_returns_empty() {
        let adapter = flights_adapter();
        let offers = adapter.search(&request()).await.unwrap();
        assert!(offers.is_empty());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod http_tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> SearchRequest {
        SearchRequest::builder("EMA", "ALC", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .nights(4)
            .adults(2)
            .build()
            .unwrap()
    }

    fn settings(server: &MockServer) -> AmadeusSettings {
        AmadeusSettings {
            base_url: server.uri(),
            api_key: Some("client-id".to_string()),
            api_secret: Some("client-secret".to_string()),
            ..AmadeusSettings::default()
        }
    }

    async fn mount_token(server: &MockServer, expect: u64) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-1",
                "token_type": "Bearer",
                "expires_in": 1799
            })))
            .expect(expect)
            .mount(server)
            .await;
    }

    fn flight_body() -> serde_json::Value {
        json!({"data": [{
            "price": {"grandTotal": "189.40"},
            "itineraries": [{"segments": [{
                "departure": {"at": "2026-09-01T07:30:00"},
                "arrival": {"at": "2026-09-01T09:00:00"},
                "carrierCode": "FR"
            }]}]
        }]})
    }

    #[tokio::test]
    async fn token_is_cached_across_searches() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path(FLIGHT_OFFERS_PATH))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(flight_body()))
            .expect(2)
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusFlights::new(&settings, auth).unwrap();

        for _ in 0..2 {
            let offers = adapter.search(&request()).await.unwrap();
            assert_eq!(offers.len(), 1);
            assert_eq!(offers[0].price().to_string(), "189.40");
        }
    }

    #[tokio::test]
    async fn rejected_token_is_refreshed_once() {
        let server = MockServer::start().await;
        mount_token(&server, 2).await;
        Mock::given(method("GET"))
            .and(path(FLIGHT_OFFERS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(FLIGHT_OFFERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(flight_body()))
            .expect(1)
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusFlights::new(&settings, auth).unwrap();

        let offers = adapter.search(&request()).await.unwrap();
        assert_eq!(offers.len(), 1);
    }

    #[tokio::test]
    async fn failed_token_exchange_is_a_hard_unavailable_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusFlights::new(&settings, auth).unwrap();

        let error = adapter.search(&request()).await.unwrap_err();
        assert!(matches!(error, ProviderError::Unavailable { .. }));
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn malformed_flight_record_is_skipped() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        let mut body = flight_body();
        body["data"]
            .as_array_mut()
            .unwrap()
            .push(json!({"price": 5}));
        Mock::given(method("GET"))
            .and(path(FLIGHT_OFFERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusFlights::new(&settings, auth).unwrap();

        let offers = adapter.search(&request()).await.unwrap();
        assert_eq!(offers.len(), 1);
    }

    #[tokio::test]
    async fn hotel_search_loosens_city_lookup_then_fetches_offers() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        // First attempt (radius 30) is rejected; the second succeeds.
        Mock::given(method("GET"))
            .and(path(HOTELS_BY_CITY_PATH))
            .and(query_param("radius", "30"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(HOTELS_BY_CITY_PATH))
            .and(query_param("radius", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"hotelId": "ALCBEACH"}, {"hotelId": "ALCTOWN"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(HOTEL_OFFERS_PATH))
            .and(query_param("hotelIds", "ALCBEACH,ALCTOWN"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "hotel": {"name": "Beach Resort", "rating": 4},
                    "offers": [{"boardType": "HALF_BOARD", "price": {"total": "420.00"}}]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusHotels::new(&settings, auth).unwrap();

        let offers = adapter.search(&request()).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].name(), "Beach Resort");
        assert_eq!(offers[0].stars().get(), 4);
        assert_eq!(offers[0].price().to_string(), "420.00");
    }

    #[tokio::test]
    async fn hotel_search_with_no_city_matches_returns_empty() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path(HOTELS_BY_CITY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(4)
            .mount(&server)
            .await;

        let settings = settings(&server);
        let auth = Arc::new(AmadeusAuth::new(&settings).unwrap());
        let adapter = AmadeusHotels::new(&settings, auth).unwrap();

        let offers = adapter.search(&request()).await.unwrap();
        assert!(offers.is_empty());
    }
}
