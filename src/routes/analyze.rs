use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::{
    analyzer::{analyze, Suggestion},
    errors::{ApiError, ApiResult},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(analyze_text))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The post to check
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub suggestions: Vec<Suggestion>,
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Suggestions in rule order", body = AnalyzeResponse),
        (status = 400, description = "Missing text or malformed body", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let Json(request) = payload?;

    // Whitespace-only text is still analyzed; the engine reports it in-band
    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::NoTextProvided),
    };

    debug!("Analyzing post of {} bytes", text.len());
    let suggestions = analyze(&text);
    state.metrics.record_analysis(&suggestions);
    info!("Produced {} suggestions", suggestions.len());

    Ok(Json(AnalyzeResponse { suggestions }))
}
