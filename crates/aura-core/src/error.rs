//! Centralized error types for the Aura application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use aura_weather::{GeocodeError, WeatherError};
use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the Aura application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => weather_user_message(e),
            AppError::Geocode(e) => geocode_user_message(e),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

fn weather_user_message(error: &WeatherError) -> &'static str {
    match error {
        WeatherError::Network(e) if e.is_timeout() => "The request timed out. Please try again.",
        WeatherError::Network(_) => "Unable to connect. Check your internet connection.",
        WeatherError::Status(status) if *status >= 500 => {
            "The weather service is experiencing issues. Please try again later."
        }
        WeatherError::Status(_) => "Could not fetch weather data. Please try again.",
        WeatherError::Parse(_) => "Received unexpected weather data. Please try again.",
    }
}

fn geocode_user_message(error: &GeocodeError) -> &'static str {
    match error {
        GeocodeError::Network(_) => "Unable to connect. Check your internet connection.",
        GeocodeError::Status(_) => "City search is unavailable. Please try again later.",
        GeocodeError::CityNotFound(_) => "Could not find that city. Please check the spelling.",
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_errors_map_to_user_messages() {
        let e: AppError = WeatherError::Status(503).into();
        assert!(e.to_string().contains("503"));
        assert_eq!(
            e.user_message(),
            "The weather service is experiencing issues. Please try again later."
        );

        let e: AppError = WeatherError::Status(404).into();
        assert_eq!(e.user_message(), "Could not fetch weather data. Please try again.");

        let e: AppError = WeatherError::Parse("bad hourly time".into()).into();
        assert_eq!(
            e.user_message(),
            "Received unexpected weather data. Please try again."
        );
    }

    #[test]
    fn geocode_errors_map_to_user_messages() {
        let e: AppError = GeocodeError::CityNotFound("atlantis".into()).into();
        assert!(e.to_string().contains("atlantis"));
        assert_eq!(
            e.user_message(),
            "Could not find that city. Please check the spelling."
        );

        let e: AppError = GeocodeError::Status(502).into();
        assert_eq!(
            e.user_message(),
            "City search is unavailable. Please try again later."
        );
    }

    #[test]
    fn app_error_wraps_config_error() {
        let e: AppError = ConfigError::Invalid("bad latitude".into()).into();
        assert!(e.to_string().contains("bad latitude"));
        assert_eq!(e.user_message(), "Invalid configuration. Check your settings.");
    }
}
