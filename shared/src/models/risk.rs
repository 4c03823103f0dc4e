//! Crop failure risk models
//!
//! Risk classification is computed by the external service; these types
//! only carry it through to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::types::RiskLevel;

/// Result returned by the external risk prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPredictionResult {
    pub risk_score: f64,
    pub risk_level: String,
    pub color: String,
    pub explanation: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub district_info: Option<DistrictInfo>,
}

/// District soil context attached to a risk prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictInfo {
    pub soil_type: String,
    pub soil_quality: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

impl RiskPredictionResult {
    /// Check the boundary contract; the payload itself is never altered
    pub fn validate(&self) -> AdvisoryResult<()> {
        if !self.risk_score.is_finite() || !(0.0..=100.0).contains(&self.risk_score) {
            return Err(AdvisoryError::invalid(
                "risk_score",
                "Risk score must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Service tier as a typed level, when recognised
    pub fn tier(&self) -> Option<RiskLevel> {
        RiskLevel::from_label(&self.risk_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(score: f64, level: &str) -> RiskPredictionResult {
        RiskPredictionResult {
            risk_score: score,
            risk_level: level.to_string(),
            color: "orange".to_string(),
            explanation: "Rainfall deficit detected".to_string(),
            recommendations: vec!["Consider purchasing crop insurance".to_string()],
            district_info: Some(DistrictInfo {
                soil_type: "Alluvial".to_string(),
                soil_quality: 0.7,
                state: None,
                district: None,
            }),
        }
    }

    #[test]
    fn test_score_bounds() {
        assert!(prediction(0.0, "Low").validate().is_ok());
        assert!(prediction(100.0, "High").validate().is_ok());
        assert!(prediction(100.5, "High").validate().is_err());
        assert!(prediction(-1.0, "Low").validate().is_err());
        assert!(prediction(f64::NAN, "Low").validate().is_err());
    }

    #[test]
    fn test_tier() {
        assert_eq!(prediction(45.0, "Medium").tier(), Some(RiskLevel::Medium));
        assert_eq!(prediction(45.0, "Severe").tier(), None);
    }
}
