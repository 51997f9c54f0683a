use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::{
    analyzer::{Suggestion, SuggestionKind},
    extraction::ExtractionResult,
    routes::{analyze::AnalyzeRequest, analyze::AnalyzeResponse, health::HealthResponse},
    utils::file_type::FileKind,
};

/// Body of every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "postwise",
        description = "Writing suggestions for social-media posts, plus PDF/TXT text extraction"
    ),
    paths(
        crate::routes::analyze::analyze_text,
        crate::routes::upload::upload_file,
        crate::routes::health::health_check,
        crate::routes::metrics::get_prometheus_metrics,
    ),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        Suggestion,
        SuggestionKind,
        ExtractionResult,
        FileKind,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "analysis", description = "Post analysis"),
        (name = "extraction", description = "Text extraction from uploads"),
        (name = "health", description = "Liveness"),
        (name = "metrics", description = "Prometheus metrics"),
    )
)]
pub struct ApiDoc;
