//! HTTP handlers for crop recommendation ranking

use axum::Json;
use shared::{CropRecommendationResult, RecommendationSet};

use crate::error::AppResult;
use crate::services::RecommendationService;

/// Rank a recommendation service result
pub async fn rank_recommendations(
    Json(result): Json<CropRecommendationResult>,
) -> AppResult<Json<RecommendationSet>> {
    let service = RecommendationService::new();
    let set = service.present(&result)?;
    Ok(Json(set))
}
