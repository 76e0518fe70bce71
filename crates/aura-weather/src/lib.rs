//! Weather services for Aura
//!
//! Current and hourly weather via the Open-Meteo API, city-search
//! geocoding, and weather-code driven display helpers (description/icon
//! pairs, background scene presets, mood).

pub mod conditions;
pub mod geocode;
pub mod provider;
pub mod types;

pub use conditions::{describe, CodeInfo, Intensity, Mood, ScenePreset};
pub use geocode::CityResolver;
pub use provider::WeatherProvider;
pub use types::*;
