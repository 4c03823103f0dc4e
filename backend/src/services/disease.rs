//! Disease detection gating service

use shared::{DiseaseAssessment, DiseaseDetectionResult};
use tracing::{debug, warn};

/// Gates disease classifier output before it reaches the farmer
#[derive(Clone, Copy, Default)]
pub struct DiseaseService;

impl DiseaseService {
    pub fn new() -> Self {
        Self
    }

    /// Short-circuit non-plant images; pass diagnoses through
    pub fn assess(&self, result: &DiseaseDetectionResult) -> DiseaseAssessment {
        let assessment = result.assess();
        match &assessment {
            DiseaseAssessment::NotAPlant => {
                warn!("Disease classifier reported a non-plant image");
            }
            DiseaseAssessment::Diagnosed {
                disease, healthy, ..
            } => {
                debug!(disease = %disease, healthy = *healthy, "Disease diagnosis accepted");
            }
        }
        assessment
    }
}
