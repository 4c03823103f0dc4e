//! Crop recommendation presentation service

use shared::{present_recommendations, CropRecommendationResult, RecommendationSet};
use tracing::debug;

use crate::error::AppResult;

/// Turns recommendation service output into a ranked view
#[derive(Clone, Copy, Default)]
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Rank a recommendation result; fails when the primary prediction is missing
    pub fn present(&self, result: &CropRecommendationResult) -> AppResult<RecommendationSet> {
        let set = present_recommendations(result)?;
        debug!(
            top = %set.recommendations[0].recommendation.label,
            entries = set.recommendations.len(),
            ignored_alternatives = result
                .alternative_crops
                .len()
                .saturating_sub(set.recommendations.len() - 1),
            "Ranked crop recommendations"
        );
        Ok(set)
    }
}
