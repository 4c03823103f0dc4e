//! Weather alert synthesis

use crate::catalog::RuleCatalog;
use crate::error::AdvisoryResult;
use crate::models::{Alert, WeatherSnapshot};
use crate::validation::validate_weather;

/// Evaluate a snapshot against the global alert rules.
///
/// Every rule is checked independently and fired alerts keep catalog order.
/// When nothing fires the single fallback alert is returned, so the result is
/// never empty.
pub fn synthesize_alerts(weather: &WeatherSnapshot) -> AdvisoryResult<Vec<Alert>> {
    synthesize_alerts_with(RuleCatalog::global(), weather)
}

/// Same as [`synthesize_alerts`] against an explicit catalog
pub fn synthesize_alerts_with(
    catalog: &RuleCatalog,
    weather: &WeatherSnapshot,
) -> AdvisoryResult<Vec<Alert>> {
    validate_weather(weather)?;

    let mut alerts: Vec<Alert> = catalog
        .alert_rules()
        .iter()
        .filter(|rule| rule.fires(weather))
        .map(|rule| rule.to_alert())
        .collect();

    if alerts.is_empty() {
        alerts.push(catalog.fallback_alert().clone());
    }

    Ok(alerts)
}
