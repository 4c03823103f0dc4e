//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Discrete agronomic risk tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Parse a tier label as produced by the external risk service
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "High" | "high" => Some(RiskLevel::High),
            "Medium" | "medium" => Some(RiskLevel::Medium),
            "Low" | "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// Display colour attached to an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
}

impl SeverityColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityColor::Red => "red",
            SeverityColor::Orange => "orange",
            SeverityColor::Yellow => "yellow",
            SeverityColor::Blue => "blue",
            SeverityColor::Green => "green",
        }
    }
}

/// Weather dimension a rule reads from a snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherField {
    Temperature,
    Rainfall,
    Humidity,
    Wind,
}

impl WeatherField {
    pub fn unit(&self) -> &'static str {
        match self {
            WeatherField::Temperature => "°C",
            WeatherField::Rainfall => "mm",
            WeatherField::Humidity => "%",
            WeatherField::Wind => "km/h",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_display_matches_wire_label() {
        for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
            let wire = serde_json::to_value(level).unwrap();
            assert_eq!(wire, level.to_string());
            assert_eq!(RiskLevel::from_label(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn test_severity_color_as_str_matches_wire_label() {
        for color in [
            SeverityColor::Red,
            SeverityColor::Orange,
            SeverityColor::Yellow,
            SeverityColor::Blue,
            SeverityColor::Green,
        ] {
            assert_eq!(serde_json::to_value(color).unwrap(), color.as_str());
        }
    }

    #[test]
    fn test_weather_field_units() {
        assert_eq!(WeatherField::Temperature.unit(), "°C");
        assert_eq!(WeatherField::Rainfall.unit(), "mm");
        assert_eq!(WeatherField::Humidity.unit(), "%");
        assert_eq!(WeatherField::Wind.unit(), "km/h");
    }
}
