use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Career advisor settings
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

/// Career advisor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Cap on rendered recommendation cards; `None` shows every match
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature unit preference
    pub temperature_unit: TemperatureUnit,

    /// Refresh interval in minutes
    pub refresh_minutes: u32,

    /// Location used when no explicit city search has happened
    #[serde(default)]
    pub fallback: FallbackLocation,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Auto,
            refresh_minutes: 15,
            fallback: FallbackLocation::default(),
        }
    }
}

/// Default location shown before any search or geolocation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl Default for FallbackLocation {
    fn default() -> Self {
        Self {
            latitude: 20.7478,
            longitude: 78.6022,
            display_name: "Wardha, Maharashtra".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aura");

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("aura");

        Ok(config_dir.join("config.toml"))
    }

    /// Validate the configuration, collecting errors and warnings
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let fallback = &self.weather.fallback;
        if !(-90.0..=90.0).contains(&fallback.latitude) {
            result.add_error(
                "weather.fallback.latitude",
                format!("{} is outside -90..=90", fallback.latitude),
            );
        }
        if !(-180.0..=180.0).contains(&fallback.longitude) {
            result.add_error(
                "weather.fallback.longitude",
                format!("{} is outside -180..=180", fallback.longitude),
            );
        }
        if fallback.display_name.trim().is_empty() {
            result.add_warning(
                "weather.fallback.display_name",
                "empty display name; coordinates will be shown instead",
            );
        }

        if self.weather.refresh_minutes == 0 {
            result.add_error("weather.refresh_minutes", "must be at least 1");
        } else if self.weather.refresh_minutes > 24 * 60 {
            result.add_warning(
                "weather.refresh_minutes",
                "longer than a day; weather will rarely update",
            );
        }

        if self.advisor.max_results == Some(0) {
            result.add_error("advisor.max_results", "must be at least 1 when set");
        }

        result
    }
}
