//! Weather alert and crop advisory service

use shared::{
    evaluate_weather_with, synthesize_alerts_with, Alert, RuleCatalog, WeatherEvaluation,
    WeatherSnapshot,
};
use tracing::debug;

use crate::error::AppResult;

/// Evaluates weather snapshots against the installed rule catalog
#[derive(Clone, Copy)]
pub struct WeatherAdvisoryService {
    catalog: &'static RuleCatalog,
}

impl WeatherAdvisoryService {
    /// Create a new WeatherAdvisoryService instance
    pub fn new(catalog: &'static RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Global alerts for a snapshot
    pub fn alerts(&self, weather: &WeatherSnapshot) -> AppResult<Vec<Alert>> {
        let alerts = synthesize_alerts_with(self.catalog, weather)?;
        debug!(
            count = alerts.len(),
            first = %alerts[0].id,
            color = alerts[0].severity_color.as_str(),
            "Synthesized weather alerts"
        );
        Ok(alerts)
    }

    /// Alerts plus advisory when a crop is selected
    pub fn evaluate(
        &self,
        crop: Option<&str>,
        weather: &WeatherSnapshot,
    ) -> AppResult<WeatherEvaluation> {
        let evaluation = evaluate_weather_with(self.catalog, crop, weather)?;
        debug!(
            alerts = evaluation.alerts.len(),
            crop = crop.unwrap_or("-"),
            risk = %evaluation
                .advisory
                .as_ref()
                .map_or_else(|| "-".to_string(), |a| a.risk_level.to_string()),
            generic = evaluation.advisory.as_ref().map(|a| a.generic),
            "Evaluated weather"
        );
        Ok(evaluation)
    }
}
