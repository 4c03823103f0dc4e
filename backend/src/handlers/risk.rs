//! HTTP handlers for crop failure risk review

use axum::Json;
use shared::RiskPredictionResult;

use crate::error::AppResult;
use crate::services::risk::{RiskReview, RiskService};

/// Validate and pass through an external risk prediction
pub async fn review_risk(
    Json(prediction): Json<RiskPredictionResult>,
) -> AppResult<Json<RiskReview>> {
    let review = RiskService::new().review(prediction)?;
    Ok(Json(review))
}
