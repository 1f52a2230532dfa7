//! # Booking.com Adapter
//!
//! Booking.com hotel search via RapidAPI.
//!
//! Prices arrive as bare numbers or `{amount}`/`{total}`/`{current}`
//! objects, and hotel details are split between a nested `hotel` object and
//! the record root depending on the plan tier. Extraction probes both.

use crate::domain::entities::{HotelOffer, SearchRequest};
use crate::domain::value_objects::{BoardType, Price, ProviderId, StarRating};
use crate::infrastructure::config::BookingSettings;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{rapidapi_headers, HttpClient};
use crate::infrastructure::providers::traits::ProviderAdapter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

const SEARCH_PATH: &str = "/v1/hotels/search";

#[derive(Debug, Serialize)]
struct BookingQuery {
    dest_id: String,
    search_type: &'static str,
    arrival_date: String,
    departure_date: String,
    adults: u32,
    children: u32,
    room_qty: u32,
    currency: String,
    locale: &'static str,
}

#[derive(Debug, Deserialize)]
struct BookingResponse {
    #[serde(default)]
    result: Vec<Value>,
}

/// Booking.com hotel adapter.
#[derive(Debug)]
pub struct BookingComHotels {
    id: ProviderId,
    http: HttpClient,
    api_key: Option<String>,
    host: String,
}

impl BookingComHotels {
    /// Creates the adapter from settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &BookingSettings) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("booking-com"),
            http: HttpClient::new(settings.timeout_ms)?,
            api_key: settings.api_key.clone(),
            host: settings.host.clone(),
        })
    }

    fn build_query(&self, request: &SearchRequest) -> BookingQuery {
        BookingQuery {
            dest_id: request.destination().to_string(),
            search_type: "city",
            arrival_date: request.start_date().to_string(),
            departure_date: request.check_out().to_string(),
            adults: request.adults(),
            children: request.children(),
            room_qty: 1,
            currency: request.currency().to_string(),
            locale: "en-gb",
        }
    }

    fn map_offer(&self, record: &Value, request: &SearchRequest) -> HotelOffer {
        let price_value = match record.get("price") {
            Some(obj @ Value::Object(_)) => obj
                .get("amount")
                .or_else(|| obj.get("total"))
                .or_else(|| obj.get("current")),
            other => other,
        };
        let price = Price::from_json(price_value);

        let name = record
            .pointer("/hotel/name")
            .or_else(|| record.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(HotelOffer::UNKNOWN_NAME);

        let stars = StarRating::from_json(
            record
                .pointer("/hotel/stars")
                .or_else(|| record.get("stars"))
                .or_else(|| record.pointer("/hotel/rating"))
                .or_else(|| record.get("rating")),
        );

        let board = record
            .get("board")
            .or_else(|| record.get("mealPlan"))
            .and_then(Value::as_str);

        let link = record
            .get("bookingLink")
            .or_else(|| record.get("url"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        HotelOffer::new(
            "Booking.com via RapidAPI",
            self.id.clone(),
            name,
            price,
            request.start_date(),
            request.check_out(),
        )
        .with_stars(stars)
        .with_board(BoardType::from_option(board))
        .with_link(link)
        .with_raw(record.clone())
    }
}

#[async_trait]
impl ProviderAdapter for BookingComHotels {
    type Offer = HotelOffer;

    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<Vec<HotelOffer>> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!(provider = %self.id, "API key not configured, skipping");
            return Ok(Vec::new());
        };

        let url = format!("https://{}{}", self.host, SEARCH_PATH);
        let query = self.build_query(request);
        let response: BookingResponse = self
            .http
            .get_with_params_and_headers(&url, &query, rapidapi_headers(api_key, &self.host)?)
            .await?;

        let offers: Vec<HotelOffer> = response
            .result
            .iter()
            .map(|record| self.map_offer(record, request))
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

    fn adapter(api_key: Option<&str>) -> BookingComHotels {
        let settings = BookingSettings {
            api_key: api_key.map(str::to_string),
            ..BookingSettings::default()
        };
        BookingComHotels::new(&settings).unwrap()
    }

    fn request() -> SearchRequest {
        SearchRequest::builder("EMA", "ALC", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
            .nights(4)
            .adults(2)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn missing_key_yields_empty() {
        let offers = adapter(None).search(&request()).await.unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn query_uses_city_search_and_stay_dates() {
        let query = adapter(Some("k")).build_query(&request());
        assert_eq!(query.dest_id, "ALC");
        assert_eq!(query.search_type, "city");
        assert_eq!(query.arrival_date, "2026-09-01");
        assert_eq!(query.departure_date, "2026-09-05");
    }

    #[test]
    fn maps_nested_hotel_fields() {
        let offer = adapter(Some("k")).map_offer(
            &json!({
                "hotel": {"name": "Hotel Sol", "stars": 4},
                "price": {"current": 280.0},
                "board": "HB",
                "url": "https://booking.example/sol"
            }),
            &request(),
        );
        assert_eq!(offer.name(), "Hotel Sol");
        assert_eq!(offer.stars().get(), 4);
        assert_eq!(offer.board().as_str(), "HB");
        assert_eq!(offer.link(), "https://booking.example/sol");
        assert!(offer.price().is_positive());
    }

    #[test]
    fn flat_record_and_sentinels() {
        let offer = adapter(Some("k")).map_offer(
            &json!({"name": "Hostal Mar", "price": 90, "rating": "3"}),
            &request(),
        );
        assert_eq!(offer.name(), "Hostal Mar");
        assert_eq!(offer.stars().get(), 3);
        assert!(offer.board().is_unknown());

        let empty = adapter(Some("k")).map_offer(&json!({}), &request());
        assert_eq!(empty.name(), HotelOffer::UNKNOWN_NAME);
        assert!(empty.price().is_zero());
        assert_eq!(empty.stars().get(), 0);
    }
}
