use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    errors::{ApiError, ApiResult},
    extraction::{ExtractionError, ExtractionResult},
    AppState,
};

/// Multipart field that carries the document
pub const FILE_FIELD: &str = "file";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(upload_file))
}

fn multipart_error(err: MultipartError, max_mb: u64) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { max_mb }
    } else {
        ApiError::BadRequest(format!("Invalid upload: {}", err.body_text()))
    }
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "extraction",
    request_body(content_type = "multipart/form-data", description = "Form with a single `file` field (PDF or TXT)"),
    responses(
        (status = 200, description = "Extracted text", body = ExtractionResult),
        (status = 400, description = "No file or unsupported file type", body = crate::openapi::ErrorResponse),
        (status = 413, description = "File exceeds MAX_FILE_SIZE_MB", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Image could not be OCR'd", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ExtractionResult>> {
    // Anything that is not a multipart form cannot contain a file
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Upload without multipart body: {}", rejection);
        ApiError::NoFileUploaded
    })?;
    let max_mb = state.config.max_file_size_mb;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_mb))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|e| multipart_error(e, max_mb))?;
        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        return Err(ApiError::NoFileUploaded);
    };
    info!("Received upload '{}' ({} bytes)", filename, data.len());

    match state.extractor.extract_upload(filename.clone(), data).await {
        Ok(result) => {
            state
                .metrics
                .record_upload(result.file_type, result.recovered_from_error);
            Ok(Json(result))
        }
        Err(err) => {
            match &err {
                ExtractionError::UnsupportedFileType { kind, .. } => {
                    warn!("Rejected upload '{}': unsupported type {}", filename, kind);
                    state.metrics.record_rejected_upload();
                }
                ExtractionError::Ocr(_) => state.metrics.record_ocr_failure(),
                ExtractionError::TaskFailed(_) => {}
            }
            Err(err.into())
        }
    }
}
