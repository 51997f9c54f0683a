pub mod analyzer;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod metrics;
pub mod ocr;
pub mod openapi;
pub mod routes;
pub mod test_helpers;
pub mod utils;


use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::{config::Config, extraction::TextExtractor, metrics::AppMetrics, ocr::OcrService};

pub use analyzer::{analyze, Suggestion, SuggestionKind};

/// Shared state handed to every handler
pub struct AppState {
    pub config: Config,
    pub extractor: TextExtractor,
    pub metrics: AppMetrics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let extractor = TextExtractor::new(OcrService::new_with_config(config.ocr_config()));
        Self {
            config,
            extractor,
            metrics: AppMetrics::new(),
        }
    }
}

/// Build the full application router: API routes, metrics, docs and the
/// static browser UI.
pub fn build_router(state: Arc<AppState>) -> Router {
    let config = &state.config;

    let mut app = Router::new()
        .nest("/api/analyze", routes::analyze::router())
        .nest("/api/upload", routes::upload::router())
        .nest("/api/health", routes::health::router())
        .nest("/metrics", routes::metrics::router())
        .route("/api-docs/openapi.json", get(|| async { Json(openapi::ApiDoc::openapi()) }))
        .layer(DefaultBodyLimit::max(config.max_file_size_bytes()));

    if Path::new(&config.static_dir).is_dir() {
        info!("Serving static files from {}", config.static_dir);
        app = app.fallback_service(ServeDir::new(&config.static_dir));
    } else {
        warn!("Static directory '{}' not found, browser UI disabled", config.static_dir);
    }

    if config.cors_allow_any {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}
