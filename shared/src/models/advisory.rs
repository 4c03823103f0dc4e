//! Advisory output models

use serde::{Deserialize, Serialize};

use super::weather::Alert;
use crate::types::RiskLevel;

/// Resolved guidance for one crop under one weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryBundle {
    pub crop: String,
    /// True when the crop was not in the catalog and the default rule applied
    pub generic: bool,
    pub risk_level: RiskLevel,
    pub advisory: String,
    pub irrigation: String,
    pub sowing: String,
    pub spraying: String,
    pub harvesting: String,
    pub recommended_actions: Vec<String>,
}

/// Alerts plus optional crop advisory for one weather query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherEvaluation {
    pub alerts: Vec<Alert>,
    pub advisory: Option<AdvisoryBundle>,
}
