//! Crop recommendation models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-1 output of the external classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// One entry of a ranked recommendation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub label: String,
    pub confidence: f64,
    /// 1-based rank
    pub rank: u32,
}

/// Result returned by the external crop recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendationResult {
    pub recommended_crop: Option<String>,
    pub confidence: Option<f64>,
    #[serde(default)]
    pub alternative_crops: Vec<String>,
    pub crop_details: Option<CropDetails>,
    pub soil_analysis: Option<SoilAnalysis>,
    pub message: Option<String>,
}

impl CropRecommendationResult {
    /// Primary prediction, if the service returned both a label and a score
    pub fn primary(&self) -> Option<Prediction> {
        match (&self.recommended_crop, self.confidence) {
            (Some(label), Some(confidence)) => Some(Prediction::new(label.clone(), confidence)),
            _ => None,
        }
    }
}

/// Agronomic metadata for the recommended crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub season: String,
    pub ideal_temp: String,
    pub ideal_rainfall: String,
    pub soil_type: String,
    pub growth_period: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Soil nutrient summary computed by the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilAnalysis {
    pub nitrogen_level: String,
    pub phosphorus_level: String,
    pub potassium_level: String,
    pub ph_status: String,
    /// Any further keys the service reports, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Ranked entry as shown to the farmer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCrop {
    #[serde(flatten)]
    pub recommendation: RankedRecommendation,
    /// Present on rank 1 only
    pub details: Option<CropDetails>,
}

/// Complete recommendation view built from one service result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<RankedCrop>,
    pub soil_analysis: Option<SoilAnalysis>,
}
