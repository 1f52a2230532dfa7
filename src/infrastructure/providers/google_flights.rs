//! # Google Flights Adapter
//!
//! Google Flights search via RapidAPI.
//!
//! The upstream response shape varies between plan tiers: prices arrive as
//! bare numbers or `{amount}`/`{total}` objects, airlines as strings or
//! arrays. Extraction is tolerant of all observed shapes.

use crate::domain::entities::{FlightOffer, SearchRequest};
use crate::domain::value_objects::{Price, ProviderId};
use crate::infrastructure::config::GoogleFlightsSettings;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{rapidapi_headers, HttpClient};
use crate::infrastructure::providers::traits::ProviderAdapter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

const SEARCH_PATH: &str = "/search";

#[derive(Debug, Serialize)]
struct GoogleFlightsQuery {
    from: String,
    to: String,
    date: String,
    #[serde(rename = "returnDate")]
    return_date: String,
    adults: u32,
    children: u32,
    cabin: &'static str,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct GoogleFlightsResponse {
    #[serde(default)]
    flights: Vec<Value>,
}

/// Renders a vendor field that may be a string or a number.
fn text_or_number(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Google Flights adapter.
#[derive(Debug)]
pub struct GoogleFlights {
    id: ProviderId,
    http: HttpClient,
    api_key: Option<String>,
    host: String,
}

impl GoogleFlights {
    /// Creates the adapter from settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(settings: &GoogleFlightsSettings) -> ProviderResult<Self> {
        Ok(Self {
            id: ProviderId::new("google-flights"),
            http: HttpClient::new(settings.timeout_ms)?,
            api_key: settings.api_key.clone(),
            host: settings.host.clone(),
        })
    }

    fn build_query(&self, request: &SearchRequest) -> GoogleFlightsQuery {
        GoogleFlightsQuery {
            from: request.origin().to_string(),
            to: request.destination().to_string(),
            date: request.start_date().to_string(),
            return_date: request.check_out().to_string(),
            adults: request.adults(),
            children: request.children(),
            cabin: "economy",
            currency: request.currency().to_string(),
        }
    }

    fn map_offer(&self, record: &Value) -> FlightOffer {
        // Price may be a bare number or an object with amount/total.
        let price_value = match record.get("price") {
            Some(obj @ Value::Object(_)) => obj.get("amount").or_else(|| obj.get("total")),
            other => other,
        };
        let price = Price::from_json(price_value);

        // Airline may be a string or a list.
        let airline_value = record.get("airline").or_else(|| record.get("carrier"));
        let carrier = match airline_value {
            Some(Value::String(s)) => s.as_str(),
            Some(Value::Array(items)) => items.first().and_then(Value::as_str).unwrap_or("Unknown"),
            _ => "Unknown",
        };

        let departure = record
            .pointer("/route/departure")
            .or_else(|| record.pointer("/route/departureTime"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let arrival = record
            .pointer("/route/arrival")
            .or_else(|| record.pointer("/route/arrivalTime"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let link = record
            .get("bookingLink")
            .or_else(|| record.get("deepLink"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let stops = record.get("stops").and_then(Value::as_u64).unwrap_or(0) as u32;

        let mut offer = FlightOffer::new(
            "Google Flights via RapidAPI",
            self.id.clone(),
            price,
            carrier,
        )
        .with_times(departure, arrival)
        .with_stops(stops)
        .with_link(link)
        .with_raw(record.clone());

        if let Some(duration) = text_or_number(record.get("duration")) {
            offer = offer.with_duration(duration);
        }
        offer
    }
}

#[async_trait]
impl ProviderAdapter for GoogleFlights {
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
        let response: GoogleFlightsResponse = self
            .http
            .get_with_params_and_headers(&url, &query, rapidapi_headers(api_key, &self.host)?)
            .await?;

        let offers: Vec<FlightOffer> = response
            .flights
            .iter()
            .map(|record| self.map_offer(record))
            .collect();
        info!(provider = %self.id, count = offers.len(), "flight offers mapped");
        Ok(offers)
    }
}
