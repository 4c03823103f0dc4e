//! Plant disease detection models

use serde::{Deserialize, Serialize};

/// Label the disease classifier returns for images that are not plant leaves
pub const INVALID_IMAGE_SENTINEL: &str = "invalid";

/// Result returned by the external disease detection service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDetectionResult {
    pub disease: String,
    /// Formatted score, e.g. `"97.53%"`
    pub confidence: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub treatment: Option<String>,
}

/// Outcome of gating a disease detection result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiseaseAssessment {
    /// The image was not a plant; nothing downstream is evaluated
    NotAPlant,
    Diagnosed {
        disease: String,
        display_name: String,
        healthy: bool,
        confidence: Option<f64>,
        severity: Option<String>,
        description: Option<String>,
        treatment: Option<String>,
    },
}

impl DiseaseDetectionResult {
    pub fn is_invalid_image(&self) -> bool {
        self.disease.trim().eq_ignore_ascii_case(INVALID_IMAGE_SENTINEL)
    }

    /// Gate the result on the invalid-image sentinel
    pub fn assess(&self) -> DiseaseAssessment {
        if self.is_invalid_image() {
            return DiseaseAssessment::NotAPlant;
        }

        DiseaseAssessment::Diagnosed {
            disease: self.disease.clone(),
            display_name: display_name(&self.disease),
            healthy: self.disease.to_ascii_lowercase().contains("healthy"),
            confidence: self.confidence.as_deref().and_then(parse_confidence),
            severity: self.severity.clone(),
            description: self.description.clone(),
            treatment: self.treatment.clone(),
        }
    }
}

/// `Tomato__Tomato_mosaic_virus` -> `Tomato Tomato mosaic virus`
fn display_name(class_label: &str) -> String {
    class_label
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `"97.53%"` or `"0.9753"` into a fraction in [0, 1]
pub fn parse_confidence(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let value = match trimmed.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()? / 100.0,
        None => trimmed.parse::<f64>().ok()?,
    };

    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Some(value)
    } else {
        None
    }
}
