//! WMO weather code interpretation: display pairs, scene presets, mood.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Display pair for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Fallback for codes outside the known table.
pub const UNKNOWN_CODE: CodeInfo = CodeInfo {
    description: "Unknown",
    icon: "🤷",
};

/// Look up the description/icon pair for a WMO weather code.
///
/// Total function: unrecognized codes return [`UNKNOWN_CODE`].
pub fn describe(code: i32) -> CodeInfo {
    let (description, icon) = match code {
        0 => ("Clear Sky", "☀️"),
        1 => ("Mainly Clear", "🌤️"),
        2 => ("Partly Cloudy", "⛅️"),
        3 => ("Overcast", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Rime Fog", "🌫️"),
        51 => ("Light Drizzle", "🌦️"),
        53 => ("Moderate Drizzle", "🌦️"),
        55 => ("Dense Drizzle", "🌦️"),
        61 => ("Slight Rain", "🌧️"),
        63 => ("Moderate Rain", "🌧️"),
        65 => ("Heavy Rain", "🌧️"),
        71 => ("Slight Snow", "🌨️"),
        73 => ("Moderate Snow", "🌨️"),
        75 => ("Heavy Snow", "🌨️"),
        80 => ("Slight Showers", "🌧️"),
        81 => ("Moderate Showers", "🌧️"),
        82 => ("Violent Showers", "🌧️"),
        95 => ("Thunderstorm", "⛈️"),
        _ => return UNKNOWN_CODE,
    };
    CodeInfo { description, icon }
}

/// Strength of a scene layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Moderate,
    Heavy,
}

/// Decorative background preset selected from the current weather code.
///
/// The renderer maps these to particle-system settings; this module only
/// decides which layer is active and how strong it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scene", content = "intensity", rename_all = "snake_case")]
pub enum ScenePreset {
    Sun(Intensity),
    Rain(Intensity),
    Snow(Intensity),
}

impl ScenePreset {
    /// Select a preset from a WMO weather code.
    ///
    /// Fog and overcast keep the sun layer at low strength; unknown codes
    /// behave like a mild clear day.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Sun(Intensity::Heavy),
            1 | 2 => Self::Sun(Intensity::Moderate),
            3 | 45 | 48 => Self::Sun(Intensity::Light),
            51 | 53 | 61 | 80 => Self::Rain(Intensity::Light),
            55 | 63 | 81 => Self::Rain(Intensity::Moderate),
            65 | 82 | 95 => Self::Rain(Intensity::Heavy),
            71 => Self::Snow(Intensity::Light),
            73 => Self::Snow(Intensity::Moderate),
            75 => Self::Snow(Intensity::Heavy),
            _ => Self::Sun(Intensity::Moderate),
        }
    }
}

/// Coarse mood indicator shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Bright,
    Neutral,
    Gloomy,
}

impl Mood {
    /// Thresholds: precipitation codes (>= 51) are gloomy, clear-ish codes
    /// (<= 1) are bright, everything between is neutral.
    pub fn from_wmo_code(code: i32) -> Self {
        if code >= 51 {
            Self::Gloomy
        } else if code <= 1 {
            Self::Bright
        } else {
            Self::Neutral
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Bright => "😄",
            Self::Neutral => "😐",
            Self::Gloomy => "😞",
        }
    }
}
