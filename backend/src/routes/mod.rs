//! Route definitions for the Crop Advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/catalog/crops", get(handlers::list_crops))
        .nest("/recommendations", recommendation_routes())
        .nest("/weather", weather_routes())
        .nest("/disease", disease_routes())
        .nest("/risk", risk_routes())
}

/// Crop recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/rank", post(handlers::rank_recommendations))
}

/// Weather alert and advisory routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", post(handlers::synthesize_alerts))
        .route("/advisory", post(handlers::weather_advisory))
}

/// Disease detection routes
fn disease_routes() -> Router<AppState> {
    Router::new().route("/assess", post(handlers::assess_disease))
}

/// Risk prediction routes
fn risk_routes() -> Router<AppState> {
    Router::new().route("/review", post(handlers::review_risk))
}
