//! Recommendation ranking
//!
//! The recommendation service scores only its top choice. Alternatives come
//! back as bare labels, so their confidence is approximated by fixed decay
//! factors applied to the primary score. Rank 2 and 3 confidences are a
//! display heuristic, not calibrated probabilities.

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::models::{
    CropRecommendationResult, Prediction, RankedCrop, RankedRecommendation, RecommendationSet,
};
use crate::validation::validate_prediction;

/// Confidence multipliers for rank 2 and rank 3
pub const ALTERNATIVE_DECAY: [f64; 2] = [0.75, 0.50];

/// Rank a primary prediction and its unscored alternatives.
///
/// Alternatives beyond the second are ignored.
pub fn rank(
    primary: Option<&Prediction>,
    alternatives: &[String],
) -> AdvisoryResult<Vec<RankedRecommendation>> {
    let primary = primary.ok_or_else(|| {
        AdvisoryError::invalid("primary", "A primary prediction is required for ranking")
    })?;
    validate_prediction(primary)?;

    let mut ranked = Vec::with_capacity(1 + ALTERNATIVE_DECAY.len());
    ranked.push(RankedRecommendation {
        label: primary.label.clone(),
        confidence: primary.confidence,
        rank: 1,
    });

    for (position, (label, decay)) in alternatives.iter().zip(ALTERNATIVE_DECAY).enumerate() {
        ranked.push(RankedRecommendation {
            label: label.clone(),
            confidence: primary.confidence * decay,
            rank: position as u32 + 2,
        });
    }

    Ok(ranked)
}

/// Rank a recommendation service result for display.
///
/// Crop details are attached to the top choice only; soil analysis passes
/// through unchanged.
pub fn present_recommendations(
    result: &CropRecommendationResult,
) -> AdvisoryResult<RecommendationSet> {
    let primary = result.primary();
    let ranked = rank(primary.as_ref(), &result.alternative_crops)?;

    let recommendations = ranked
        .into_iter()
        .map(|recommendation| {
            let details = if recommendation.rank == 1 {
                result.crop_details.clone()
            } else {
                None
            };
            RankedCrop {
                recommendation,
                details,
            }
        })
        .collect();

    Ok(RecommendationSet {
        recommendations,
        soil_analysis: result.soil_analysis.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropDetails, SoilAnalysis};
    use std::collections::BTreeMap;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_with_two_alternatives() {
        let primary = Prediction::new("rice", 0.8);
        let ranked = rank(Some(&primary), &labels(&["maize", "jute"])).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], RankedRecommendation { label: "rice".into(), confidence: 0.8, rank: 1 });
        assert_eq!(ranked[1].label, "maize");
        assert_eq!(ranked[1].confidence, 0.8 * 0.75);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].label, "jute");
        assert_eq!(ranked[2].confidence, 0.8 * 0.50);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_rank_ignores_extra_alternatives() {
        let primary = Prediction::new("rice", 0.9);
        let ranked = rank(Some(&primary), &labels(&["maize", "jute", "cotton", "coffee"])).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.last().unwrap().label, "jute");
    }

    #[test]
    fn test_rank_without_alternatives() {
        let primary = Prediction::new("rice", 0.9);
        let ranked = rank(Some(&primary), &[]).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_rank_missing_primary() {
        let err = rank(None, &labels(&["maize"])).unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidInput { ref field, .. } if field == "primary"));
    }

    #[test]
    fn test_rank_rejects_out_of_range_confidence() {
        let primary = Prediction::new("rice", 1.2);
        assert!(rank(Some(&primary), &[]).is_err());
    }

    #[test]
    fn test_present_attaches_details_to_top_choice_only() {
        let result = CropRecommendationResult {
            recommended_crop: Some("rice".into()),
            confidence: Some(0.64),
            alternative_crops: labels(&["jute", "coconut", "papaya"]),
            crop_details: Some(CropDetails {
                name: Some("Rice".into()),
                season: "Kharif (June-November)".into(),
                ideal_temp: "20-37°C".into(),
                ideal_rainfall: "1000-2500mm".into(),
                soil_type: "Clayey loam, Loamy".into(),
                growth_period: "3-6 months".into(),
                tips: vec!["Requires high water availability".into()],
            }),
            soil_analysis: Some(SoilAnalysis {
                nitrogen_level: "High".into(),
                phosphorus_level: "Medium".into(),
                potassium_level: "Low".into(),
                ph_status: "Neutral".into(),
                extra: BTreeMap::new(),
            }),
            message: None,
        };

        let set = present_recommendations(&result).unwrap();
        assert_eq!(set.recommendations.len(), 3);
        assert!(set.recommendations[0].details.is_some());
        assert!(set.recommendations[1].details.is_none());
        assert!(set.recommendations[2].details.is_none());
        assert_eq!(set.soil_analysis, result.soil_analysis);
    }

    #[test]
    fn test_present_without_primary_fails() {
        let result = CropRecommendationResult {
            recommended_crop: None,
            confidence: Some(0.64),
            alternative_crops: labels(&["jute"]),
            crop_details: None,
            soil_analysis: None,
            message: None,
        };
        assert!(present_recommendations(&result).is_err());
    }
}
