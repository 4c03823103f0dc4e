//! Input validation for the decision core
//!
//! Out-of-range inputs are rejected, never clamped.

use validator::Validate;

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::models::{Prediction, WeatherSnapshot};

// ============================================================================
// Prediction Validations
// ============================================================================

/// Validate a classifier confidence is a probability
pub fn validate_confidence(confidence: f64) -> AdvisoryResult<()> {
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(AdvisoryError::invalid(
            "confidence",
            "Confidence must be between 0 and 1",
        ));
    }
    Ok(())
}

/// Validate a top-1 prediction
pub fn validate_prediction(prediction: &Prediction) -> AdvisoryResult<()> {
    if prediction.label.trim().is_empty() {
        return Err(AdvisoryError::invalid("label", "Prediction label is empty"));
    }
    validate_confidence(prediction.confidence)
}

// ============================================================================
// Weather Validations
// ============================================================================

// Declaration order of the range-checked fields, so the first failure is stable.
// Errors name the JSON key the client sent, not the struct field.
const RANGE_CHECKED_FIELDS: [(&str, &str, &str); 3] = [
    ("rainfall_mm", "rainfallMm", "Rainfall cannot be negative"),
    ("humidity_pct", "humidityPct", "Humidity must be between 0 and 100%"),
    ("wind_kmh", "windKmh", "Wind speed cannot be negative"),
];

/// Validate a weather snapshot before any rule reads it
pub fn validate_weather(weather: &WeatherSnapshot) -> AdvisoryResult<()> {
    let readings = [
        ("temperatureC", weather.temperature_c),
        ("rainfallMm", weather.rainfall_mm),
        ("humidityPct", weather.humidity_pct),
        ("windKmh", weather.wind_kmh),
    ];
    if let Some((field, _)) = readings.iter().find(|(_, value)| !value.is_finite()) {
        return Err(AdvisoryError::invalid(*field, "Reading must be a finite number"));
    }

    if let Err(errors) = weather.validate() {
        let failed = errors.field_errors();
        let (key, message) = RANGE_CHECKED_FIELDS
            .iter()
            .find(|(field, _, _)| failed.contains_key(field))
            .map(|&(_, key, message)| (key, message))
            .unwrap_or(("weather", "Weather reading out of range"));
        return Err(AdvisoryError::invalid(key, message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_confidence_bounds() {
        assert!(validate_confidence(0.0).is_ok());
        assert!(validate_confidence(1.0).is_ok());
        assert!(validate_confidence(0.42).is_ok());
        assert!(validate_confidence(1.01).is_err());
        assert!(validate_confidence(-0.01).is_err());
        assert!(validate_confidence(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_prediction_empty_label() {
        let err = validate_prediction(&Prediction::new("  ", 0.9)).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "label"));
    }

    #[test]
    fn test_validate_weather_valid() {
        assert!(validate_weather(&WeatherSnapshot::new(32.0, 45.0, 78.0, 12.0)).is_ok());
        // Sub-zero temperatures are legitimate readings
        assert!(validate_weather(&WeatherSnapshot::new(-4.0, 0.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_validate_weather_humidity_upper_bound_inclusive() {
        assert!(validate_weather(&WeatherSnapshot::new(20.0, 10.0, 100.0, 5.0)).is_ok());
    }

    #[test]
    fn test_validate_weather_humidity_out_of_range() {
        let err = validate_weather(&WeatherSnapshot::new(20.0, 10.0, 100.1, 5.0)).unwrap_err();
        assert_eq!(
            err,
            AdvisoryError::invalid("humidityPct", "Humidity must be between 0 and 100%")
        );
    }

    #[test]
    fn test_validate_weather_negative_rainfall() {
        let err = validate_weather(&WeatherSnapshot::new(20.0, -1.0, 50.0, 5.0)).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "rainfallMm"));
    }

    #[test]
    fn test_validate_weather_negative_wind() {
        let err = validate_weather(&WeatherSnapshot::new(20.0, 1.0, 50.0, -3.0)).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "windKmh"));
    }

    #[test]
    fn test_validate_weather_non_finite() {
        let err = validate_weather(&WeatherSnapshot::new(f64::NAN, 1.0, 50.0, 3.0)).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "temperatureC"));

        let err =
            validate_weather(&WeatherSnapshot::new(20.0, f64::INFINITY, 50.0, 3.0)).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "rainfallMm"));
    }
}
