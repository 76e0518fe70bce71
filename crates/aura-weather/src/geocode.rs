//! Forward geocoding: resolve a city name to coordinates and a display name.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use crate::types::{GeocodeError, GeocodedCity};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// City-search client. Holds one configured HTTP client; the base URL is
/// injectable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct CityResolver {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    admin1: Option<String>,
    country: Option<String>,
}

impl CityResolver {
    /// Create a resolver against the public Open-Meteo geocoding endpoint.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(GEOCODING_URL)
    }

    /// Create a resolver against an explicit endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve a user-entered city name to coordinates.
    ///
    /// Takes the first (most relevant) result. An empty result set maps to
    /// [`GeocodeError::CityNotFound`] so the caller can show a spelling hint.
    pub async fn search_city(&self, city: &str) -> Result<GeocodedCity, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body: GeocodingResponse = response.json().await?;
        let Some(first) = body.results.and_then(|r| r.into_iter().next()) else {
            return Err(GeocodeError::CityNotFound(city.to_string()));
        };

        // Prefer "City, Region"; fall back to the country when no region is known
        let display_name = match (&first.admin1, &first.country) {
            (Some(admin1), _) if !admin1.is_empty() => format!("{}, {}", first.name, admin1),
            (_, Some(country)) if !country.is_empty() => format!("{}, {}", first.name, country),
            _ => first.name.clone(),
        };

        tracing::info!("Geocoded {:?} to {}", city, display_name);
        Ok(GeocodedCity {
            latitude: first.latitude,
            longitude: first.longitude,
            display_name,
        })
    }
}
