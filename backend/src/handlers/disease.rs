//! HTTP handlers for disease detection gating

use axum::Json;
use shared::{DiseaseAssessment, DiseaseDetectionResult};

use crate::services::DiseaseService;

/// Gate a disease classifier result
pub async fn assess_disease(Json(result): Json<DiseaseDetectionResult>) -> Json<DiseaseAssessment> {
    Json(DiseaseService::new().assess(&result))
}
