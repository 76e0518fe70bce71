//! Open-Meteo forecast and air-quality client.
//!
//! Two sequential GET requests per fetch, no retries. Base URLs are
//! injectable so tests can point the provider at a mock server.

use crate::types::{
    AirQuality, CurrentConditions, DailySummary, HourlyEntry, WeatherError, WeatherSnapshot,
};
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,visibility,precipitation";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation_probability";
const DAILY_FIELDS: &str = "uv_index_max,precipitation_probability_max";

// Open-Meteo hourly timestamps have no seconds or offset
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    forecast_url: String,
    air_quality_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    hourly: HourlyBlock,
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    visibility: f64,
    precipitation: f64,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<i32>,
    precipitation_probability: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    uv_index_max: Vec<f64>,
    precipitation_probability_max: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: AirQualityBlock,
}

#[derive(Debug, Deserialize)]
struct AirQualityBlock {
    pm2_5: f64,
}

impl WeatherProvider {
    /// Create a provider against the public Open-Meteo endpoints.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_urls(FORECAST_URL, AIR_QUALITY_URL)
    }

    /// Create a provider against explicit endpoints.
    pub fn with_base_urls(
        forecast_url: impl Into<String>,
        air_quality_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            forecast_url: forecast_url.into(),
            air_quality_url: air_quality_url.into(),
        })
    }

    /// Fetch current conditions, hourly forecast, daily aggregates and air
    /// quality for the given coordinates.
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let forecast = self.fetch_forecast(latitude, longitude).await?;
        let air_quality = self.fetch_air_quality(latitude, longitude).await?;

        let snapshot = Self::shape(forecast, air_quality)?;
        tracing::info!(
            "Fetched weather for {:.4},{:.4}: code {}, {} hourly entries",
            latitude,
            longitude,
            snapshot.current.weather_code,
            snapshot.hourly.len()
        );
        Ok(snapshot)
    }

    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn fetch_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirQualityResponse, WeatherError> {
        let response = self
            .client
            .get(&self.air_quality_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "pm2_5".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    fn shape(
        forecast: ForecastResponse,
        air_quality: AirQualityResponse,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let current = CurrentConditions {
            temperature: forecast.current.temperature_2m,
            apparent_temperature: forecast.current.apparent_temperature,
            humidity: forecast.current.relative_humidity_2m,
            wind_speed: forecast.current.wind_speed_10m,
            visibility_meters: forecast.current.visibility,
            precipitation_mm: forecast.current.precipitation,
            weather_code: forecast.current.weather_code,
        };

        let h = forecast.hourly;
        if h.temperature_2m.len() != h.time.len()
            || h.weather_code.len() != h.time.len()
            || h.precipitation_probability.len() != h.time.len()
        {
            return Err(WeatherError::Parse(
                "hourly series have mismatched lengths".to_string(),
            ));
        }

        let mut hourly = Vec::with_capacity(h.time.len());
        for (i, raw_time) in h.time.iter().enumerate() {
            let time = NaiveDateTime::parse_from_str(raw_time, HOURLY_TIME_FORMAT)
                .map_err(|e| WeatherError::Parse(format!("bad hourly time {raw_time:?}: {e}")))?;
            hourly.push(HourlyEntry {
                time,
                temperature: h.temperature_2m[i],
                weather_code: h.weather_code[i],
                precipitation_probability: h.precipitation_probability[i],
            });
        }

        let today = forecast.daily.and_then(|d| {
            match (
                d.uv_index_max.first(),
                d.precipitation_probability_max.first(),
            ) {
                (Some(&uv), Some(&prob)) => Some(DailySummary {
                    uv_index_max: uv,
                    precipitation_probability_max: prob,
                }),
                _ => None,
            }
        });

        Ok(WeatherSnapshot {
            current,
            hourly,
            today,
            air_quality: AirQuality {
                pm2_5: air_quality.current.pm2_5,
            },
        })
    }
}
