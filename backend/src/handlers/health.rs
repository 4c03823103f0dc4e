//! Health check and catalog handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub catalog_version: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        catalog_version: state.catalog.version().to_string(),
    })
}

#[derive(Serialize)]
pub struct CropListResponse {
    pub catalog_version: String,
    pub crops: Vec<String>,
}

/// Crops with a dedicated advisory rule
pub async fn list_crops(State(state): State<AppState>) -> Json<CropListResponse> {
    Json(CropListResponse {
        catalog_version: state.catalog.version().to_string(),
        crops: state.catalog.crop_names().map(str::to_string).collect(),
    })
}
