//! Weather data models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SeverityColor, WeatherField};

/// A weather reading supplied by the external provider for one query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    #[validate(range(min = 0.0))]
    pub rainfall_mm: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity_pct: f64,
    #[validate(range(min = 0.0))]
    pub wind_kmh: f64,
}

impl WeatherSnapshot {
    pub fn new(temperature_c: f64, rainfall_mm: f64, humidity_pct: f64, wind_kmh: f64) -> Self {
        Self {
            temperature_c,
            rainfall_mm,
            humidity_pct,
            wind_kmh,
        }
    }

    /// Read a single dimension
    pub fn reading(&self, field: WeatherField) -> f64 {
        match field {
            WeatherField::Temperature => self.temperature_c,
            WeatherField::Rainfall => self.rainfall_mm,
            WeatherField::Humidity => self.humidity_pct,
            WeatherField::Wind => self.wind_kmh,
        }
    }
}

/// User-facing weather alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Identifier of the catalog rule that produced this alert
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity_color: SeverityColor,
}
