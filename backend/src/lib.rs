//! Crop Advisory Platform - Backend Server
//!
//! HTTP surface over the decision core: recommendation ranking, weather
//! alerts, crop advisories, disease gating and risk pass-through.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::RuleCatalog;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;
pub use error::{AppError, AppResult};

const DEFAULT_LOG_FILTER: &str =
    "advisory_server=debug,crop_advisory_backend=debug,tower_http=debug";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static RuleCatalog,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: &'static RuleCatalog, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

/// Initialize tracing with an env filter and optional JSON output
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Install the rule catalog for this process.
///
/// Loads the override file when one is configured, otherwise the built-in
/// table. Must run before any request is served.
pub fn install_catalog(config: &Config) -> AppResult<&'static RuleCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            tracing::info!("Loading rule catalog from {}", path);
            let json = std::fs::read_to_string(path)
                .map_err(|e| AppError::Configuration(format!("{}: {}", path, e)))?;
            RuleCatalog::from_json(&json)?
        }
        None => RuleCatalog::builtin(),
    };

    let installed = RuleCatalog::install(catalog)?;
    for rule in installed.alert_rules() {
        tracing::debug!(
            id = %rule.id,
            threshold = %format!("{}{}", rule.threshold, rule.field.unit()),
            color = rule.severity_color.as_str(),
            "Alert rule active"
        );
    }
    tracing::info!(
        version = installed.version(),
        crops = installed.crop_names().count(),
        alert_rules = installed.alert_rules().len(),
        "Rule catalog installed"
    );
    Ok(installed)
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisory Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
