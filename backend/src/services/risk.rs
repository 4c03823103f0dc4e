//! Crop failure risk pass-through service

use serde::Serialize;
use shared::{RiskLevel, RiskPredictionResult};
use tracing::debug;

use crate::error::AppResult;

/// Risk prediction as received, with its tier parsed for display
#[derive(Debug, Clone, Serialize)]
pub struct RiskReview {
    #[serde(flatten)]
    pub prediction: RiskPredictionResult,
    pub tier: Option<RiskLevel>,
}

/// Checks external risk predictions without reclassifying them
#[derive(Clone, Copy, Default)]
pub struct RiskService;

impl RiskService {
    pub fn new() -> Self {
        Self
    }

    pub fn review(&self, prediction: RiskPredictionResult) -> AppResult<RiskReview> {
        prediction.validate()?;
        let tier = prediction.tier();
        debug!(
            score = prediction.risk_score,
            level = %prediction.risk_level,
            recognised = tier.is_some(),
            "Reviewed risk prediction"
        );
        Ok(RiskReview { prediction, tier })
    }
}
