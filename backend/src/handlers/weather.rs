//! HTTP handlers for weather alert and advisory endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{Alert, WeatherEvaluation, WeatherSnapshot};

use crate::error::AppResult;
use crate::services::WeatherAdvisoryService;
use crate::AppState;

/// Synthesize global weather alerts
pub async fn synthesize_alerts(
    State(state): State<AppState>,
    Json(weather): Json<WeatherSnapshot>,
) -> AppResult<Json<Vec<Alert>>> {
    let service = WeatherAdvisoryService::new(state.catalog);
    let alerts = service.alerts(&weather)?;
    Ok(Json(alerts))
}

/// Request body for a combined weather advisory
#[derive(Debug, Deserialize)]
pub struct WeatherAdvisoryInput {
    pub crop: Option<String>,
    pub weather: WeatherSnapshot,
}

/// Alerts plus crop advisory when a crop is selected
pub async fn weather_advisory(
    State(state): State<AppState>,
    Json(input): Json<WeatherAdvisoryInput>,
) -> AppResult<Json<WeatherEvaluation>> {
    let service = WeatherAdvisoryService::new(state.catalog);
    let crop = input
        .crop
        .as_deref()
        .map(str::trim)
        .filter(|crop| !crop.is_empty());
    let evaluation = service.evaluate(crop, &input.weather)?;
    Ok(Json(evaluation))
}
