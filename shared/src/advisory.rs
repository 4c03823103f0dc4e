//! Crop advisory resolution

use crate::alerts::synthesize_alerts_with;
use crate::catalog::RuleCatalog;
use crate::error::AdvisoryResult;
use crate::models::{AdvisoryBundle, WeatherEvaluation, WeatherSnapshot};
use crate::validation::validate_weather;

/// Resolve crop-specific guidance for a weather snapshot.
///
/// Unknown crops resolve to the catalog's generic rule; only invalid weather
/// is an error.
pub fn resolve(crop_name: &str, weather: &WeatherSnapshot) -> AdvisoryResult<AdvisoryBundle> {
    resolve_with(RuleCatalog::global(), crop_name, weather)
}

/// Same as [`resolve`] against an explicit catalog
pub fn resolve_with(
    catalog: &RuleCatalog,
    crop_name: &str,
    weather: &WeatherSnapshot,
) -> AdvisoryResult<AdvisoryBundle> {
    validate_weather(weather)?;

    let bundle = match catalog.crop_rule(crop_name) {
        Some(rule) => {
            let risk_level = rule.risk.evaluate(weather);
            AdvisoryBundle {
                crop: crop_name.to_string(),
                generic: false,
                risk_level,
                advisory: rule.advisory.clone(),
                irrigation: rule.irrigation.clone(),
                sowing: rule.sowing.clone(),
                spraying: rule.spraying.clone(),
                harvesting: rule.harvesting.clone(),
                recommended_actions: catalog.actions_for(risk_level).to_vec(),
            }
        }
        None => {
            let rule = catalog.default_rule();
            AdvisoryBundle {
                crop: crop_name.to_string(),
                generic: true,
                risk_level: rule.risk_level,
                advisory: rule.advisory.clone(),
                irrigation: rule.irrigation.clone(),
                sowing: rule.sowing.clone(),
                spraying: rule.spraying.clone(),
                harvesting: rule.harvesting.clone(),
                recommended_actions: catalog.actions_for(rule.risk_level).to_vec(),
            }
        }
    };

    Ok(bundle)
}

/// Alerts for a snapshot, plus crop advisory when a crop is selected
pub fn evaluate_weather(
    crop_name: Option<&str>,
    weather: &WeatherSnapshot,
) -> AdvisoryResult<WeatherEvaluation> {
    evaluate_weather_with(RuleCatalog::global(), crop_name, weather)
}

pub fn evaluate_weather_with(
    catalog: &RuleCatalog,
    crop_name: Option<&str>,
    weather: &WeatherSnapshot,
) -> AdvisoryResult<WeatherEvaluation> {
    let alerts = synthesize_alerts_with(catalog, weather)?;
    let advisory = crop_name
        .map(|crop| resolve_with(catalog, crop, weather))
        .transpose()?;

    Ok(WeatherEvaluation { alerts, advisory })
}
