//! # Configuration
//!
//! Environment-driven settings for provider credentials and timeouts.
//!
//! Settings load from environment variables prefixed `TRIP_DEALS`, with
//! `__` as the nesting separator, after an optional `.env` pass:
//!
//! ```text
//! TRIP_DEALS__AMADEUS__API_KEY=...
//! TRIP_DEALS__AMADEUS__API_SECRET=...
//! TRIP_DEALS__KIWI__API_KEY=...
//! TRIP_DEALS__BOOKING__API_KEY=...
//! TRIP_DEALS__SEARCH__FIRST_SUCCESS=true
//! ```
//!
//! Credential fields are `Option`: an absent key is an expected, handled
//! condition (the adapter contributes nothing), not a startup failure.

use serde::Deserialize;

fn default_amadeus_base_url() -> String {
    "https://test.api.amadeus.com".to_string()
}

fn default_amadeus_timeout_ms() -> u64 {
    20_000
}

fn default_amadeus_max_results() -> u32 {
    10
}

fn default_kiwi_host() -> String {
    "kiwi-com-cheap-flights.p.rapidapi.com".to_string()
}

fn default_google_flights_host() -> String {
    "google-flights-search.p.rapidapi.com".to_string()
}

fn default_booking_host() -> String {
    "booking-com.p.rapidapi.com".to_string()
}

fn default_rapidapi_timeout_ms() -> u64 {
    15_000
}

fn default_booking_timeout_ms() -> u64 {
    30_000
}

/// Amadeus Self-Service API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AmadeusSettings {
    /// API base URL; the default points at the test environment.
    #[serde(default = "default_amadeus_base_url")]
    pub base_url: String,
    /// OAuth2 client ID.
    #[serde(default)]
    pub api_key: Option<String>,
    /// OAuth2 client secret.
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_amadeus_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum flight offers to request per search.
    #[serde(default = "default_amadeus_max_results")]
    pub max_results: u32,
}

impl Default for AmadeusSettings {
    fn default() -> Self {
        Self {
            base_url: default_amadeus_base_url(),
            api_key: None,
            api_secret: None,
            timeout_ms: default_amadeus_timeout_ms(),
            max_results: default_amadeus_max_results(),
        }
    }
}

impl AmadeusSettings {
    /// Returns true if both OAuth2 credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

/// Kiwi.com (RapidAPI) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct KiwiSettings {
    /// RapidAPI key; absent means the adapter contributes nothing.
    #[serde(default)]
    pub api_key: Option<String>,
    /// RapidAPI host header value.
    #[serde(default = "default_kiwi_host")]
    pub host: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_rapidapi_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for KiwiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            host: default_kiwi_host(),
            timeout_ms: default_rapidapi_timeout_ms(),
        }
    }
}

/// Google Flights (RapidAPI) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleFlightsSettings {
    /// RapidAPI key; absent means the adapter contributes nothing.
    #[serde(default)]
    pub api_key: Option<String>,
    /// RapidAPI host header value.
    #[serde(default = "default_google_flights_host")]
    pub host: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_rapidapi_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GoogleFlightsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            host: default_google_flights_host(),
            timeout_ms: default_rapidapi_timeout_ms(),
        }
    }
}

/// Booking.com (RapidAPI) settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingSettings {
    /// RapidAPI key; absent means the adapter contributes nothing.
    #[serde(default)]
    pub api_key: Option<String>,
    /// RapidAPI host header value.
    #[serde(default = "default_booking_host")]
    pub host: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_booking_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            host: default_booking_host(),
            timeout_ms: default_booking_timeout_ms(),
        }
    }
}

/// Search pipeline settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSettings {
    /// Stop a category at the first provider that returns offers instead
    /// of aggregating every provider.
    #[serde(default)]
    pub first_success: bool,
}

/// Top-level application settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Amadeus credentials and endpoints.
    #[serde(default)]
    pub amadeus: AmadeusSettings,
    /// Kiwi.com adapter settings.
    #[serde(default)]
    pub kiwi: KiwiSettings,
    /// Google Flights adapter settings.
    #[serde(default)]
    pub google_flights: GoogleFlightsSettings,
    /// Booking.com adapter settings.
    #[serde(default)]
    pub booking: BookingSettings,
    /// Search pipeline settings.
    #[serde(default)]
    pub search: SearchSettings,
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// Reads an optional `.env` file first, then environment variables
    /// prefixed `TRIP_DEALS` with `__` as the nesting separator.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a variable cannot be deserialized
    /// into its field type.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("TRIP_DEALS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_credentials() {
        let settings = Settings::default();
        assert!(!settings.amadeus.has_credentials());
        assert!(settings.kiwi.api_key.is_none());
        assert!(!settings.search.first_success);
    }

    #[test]
    fn vendor_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.amadeus.base_url, "https://test.api.amadeus.com");
        assert_eq!(settings.amadeus.timeout_ms, 20_000);
        assert_eq!(settings.booking.timeout_ms, 30_000);
        assert!(settings.kiwi.host.ends_with("rapidapi.com"));
    }

    #[test]
    fn partial_amadeus_credentials_do_not_count() {
        let settings = AmadeusSettings {
            api_key: Some("key".to_string()),
            ..AmadeusSettings::default()
        };
        assert!(!settings.has_credentials());
    }
}
