use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A city resolved by the geocoding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedCity {
    pub latitude: f64,
    pub longitude: f64,
    /// "City, Region" or "City, Country" when no region is known.
    pub display_name: String,
}

/// Current conditions at the requested coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub visibility_meters: f64,
    pub precipitation_mm: f64,
    pub weather_code: i32,
}

/// One hourly forecast entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub weather_code: i32,
    pub precipitation_probability: u8,
}

/// Today's daily aggregates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailySummary {
    pub uv_index_max: f64,
    pub precipitation_probability_max: u8,
}

/// Current air quality reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirQuality {
    pub pm2_5: f64,
}

/// Complete weather bundle for one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
    pub today: Option<DailySummary>,
    pub air_quality: AirQuality,
}

impl WeatherSnapshot {
    /// The next 24 hourly entries starting at the entry whose hour-of-day
    /// matches `now`. Empty when no entry matches (e.g. truncated data).
    pub fn hourly_window(&self, now: NaiveDateTime) -> &[HourlyEntry] {
        let Some(start) = self.hourly.iter().position(|e| e.time.hour() == now.hour()) else {
            return &[];
        };
        let end = (start + 24).min(self.hourly.len());
        &self.hourly[start..end]
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather service returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Geocoding errors
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Geocoding service returned status {0}")]
    Status(u16),
    #[error("No results for \"{0}\"")]
    CityNotFound(String),
}
