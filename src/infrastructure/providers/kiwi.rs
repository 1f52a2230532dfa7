//! # Kiwi.com Adapter
//!
//! Kiwi.com flight search via RapidAPI.
//!
//! The RapidAPI edition of the Kiwi search takes dd/mm/yyyy dates and a
//! nights-at-destination window instead of an explicit return date. A
//! missing API key is an expected condition: the adapter contributes
//! nothing instead of erroring.

use crate::domain::entities::{FlightOffer, SearchRequest};
use crate::domain::value_objects::{Price, ProviderId};
use crate::infrastructure::config::KiwiSettings;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{rapidapi_headers, HttpClient};
use crate::infrastructure::providers::traits::ProviderAdapter;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

const SEARCH_PATH: &str = "/search";

/// Result cap per search; package matching needs breadth, not depth.
const RESULT_LIMIT: u32 = 3;

/// Economy cabin selector in the Kiwi API.
const CABIN_ECONOMY: &str = "M";

fn to_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Debug, Serialize)]
struct KiwiQuery {
    fly_from: String,
    fly_to: String,
    date_from: String,
    date_to: String,
    nights_in_dst_from: u32,
    nights_in_dst_to: u32,
    adults: u32,
    children: u32,
    selected_cabins: &'static str,
    curr: String,
    limit: u32,
}

#[derive(Debug, Deserialize)]
struct KiwiResponse {
    #[serde(default)]
    data: Vec<Value>,
}

/// Kiwi.com flight adapter.
#[derive(Debug)]
pub struct KiwiFlights {
    id: ProviderId,
    http: HttpClient,
    api_key: Option<String>,
    host: String,
}

impl KiwiFlights {
    /// Creates the adapter from settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &KiwiSettings) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("kiwi"),
            http: HttpClient::new(settings.timeout_ms)?,
            api_key: settings.api_key.clone(),
            host: settings.host.clone(),
        })
    }

    fn build_query(&self, request: &SearchRequest) -> KiwiQuery {
        KiwiQuery {
            fly_from: request.origin().to_string(),
            fly_to: request.destination().to_string(),
            date_from: to_ddmmyyyy(request.start_date()),
            date_to: to_ddmmyyyy(request.start_date()),
            nights_in_dst_from: request.nights(),
            nights_in_dst_to: request.nights(),
            adults: request.adults(),
            children: request.children(),
            selected_cabins: CABIN_ECONOMY,
            curr: request.currency().to_string(),
            limit: RESULT_LIMIT,
        }
    }

    fn map_offer(&self, record: &Value) -> FlightOffer {
        let price = Price::from_json(record.get("price"));
        let carrier = record
            .pointer("/airlines/0")
            .and_then(Value::as_str)
            .unwrap_or("?");
        let route = record.get("route").and_then(Value::as_array);
        let departure = route
            .and_then(|r| r.first())
            .and_then(|leg| leg.get("local_departure"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let arrival = route
            .and_then(|r| r.last())
            .and_then(|leg| leg.get("local_arrival"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let link = record
            .get("deep_link")
            .and_then(Value::as_str)
            .unwrap_or_default();

        FlightOffer::new("Kiwi via RapidAPI", self.id.clone(), price, carrier)
            .with_times(departure, arrival)
            .with_link(link)
            .with_raw(record.clone())
    }
}

#[async_trait]
impl ProviderAdapter for KiwiFlights {
    type Offer = FlightOffer;

    fn provider_id(&self) -> &ProviderId {
        &self.id
    }

    fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<Vec<FlightOffer>> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!(provider = %self.id, "API key not configured, skipping");
            return Ok(Vec::new());
        };

        let url = format!("https://{}{}", self.host, SEARCH_PATH);
        let query = self.build_query(request);
        let response: KiwiResponse = self
            .http
            .get_with_params_and_headers(&url, &query, rapidapi_headers(api_key, &self.host)?)
            .await?;

        let offers: Vec<FlightOffer> = response
            .data
            .iter()
            .map(|record| self.map_offer(record))
            .collect();
        info!(provider = %self.id, count = offers.len(), "flight offers mapped");
        Ok(offers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter(api_key: Option<&str>) -> KiwiFlights {
        let settings = KiwiSettings {
            api_key: api_key.map(str::to_string),
            ..KiwiSettings::default()
        };
        KiwiFlights::new(&settings).unwrap()
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
    fn dates_are_ddmmyyyy() {
        let query = adapter(Some("k")).build_query(&request());
        assert_eq!(query.date_from, "01/09/2026");
        assert_eq!(query.date_to, "01/09/2026");
        assert_eq!(query.nights_in_dst_from, 4);
    }

    #[test]
    fn maps_route_endpoints() {
        let record = json!({
            "price": 120.5,
            "airlines": ["FR", "W6"],
            "route": [
                {"local_departure": "2026-09-01T07:30:00.000Z",
                 "local_arrival": "2026-09-01T09:00:00.000Z"},
                {"local_departure": "2026-09-05T18:00:00.000Z",
                 "local_arrival": "2026-09-05T19:30:00.000Z"}
            ],
            "deep_link": "https://kiwi.example/deal"
        });

        let offer = adapter(Some("k")).map_offer(&record);
        assert_eq!(offer.carrier(), "FR");
        assert_eq!(offer.departure(), Some("2026-09-01T07:30:00.000Z"));
        assert_eq!(offer.arrival(), Some("2026-09-05T19:30:00.000Z"));
        assert_eq!(offer.link(), "https://kiwi.example/deal");
        assert!(offer.price().is_positive());
    }

    #[test]
    fn sparse_record_uses_sentinels() {
        let offer = adapter(Some("k")).map_offer(&json!({}));
        assert_eq!(offer.carrier(), "?");
        assert!(offer.price().is_zero());
        assert_eq!(offer.departure(), None);
    }
}
