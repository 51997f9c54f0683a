//! Errors returned by HTTP handlers
//!
//! Every error renders as `{"error": "<message>"}` with a matching status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::ocr::OcrError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No text provided")]
    NoTextProvided,

    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Unsupported file type. Use PDF or TXT.")]
    UnsupportedFileType,

    #[error("File too large (max {max_mb} MB)")]
    PayloadTooLarge { max_mb: u64 },

    #[error("{0}")]
    BadRequest(String),

    #[error("OCR failed — try a clearer image or use a PDF/TXT upload.")]
    OcrFailed(#[source] OcrError),

    #[error("Server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoTextProvided
            | ApiError::NoFileUploaded
            | ApiError::UnsupportedFileType
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::OcrFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Internal(e) => tracing::error!("Internal error: {:#}", e),
            ApiError::OcrFailed(e) => tracing::warn!("OCR error [{}]: {}", e.error_code(), e),
            _ => tracing::debug!("Request rejected ({}): {}", status, self),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFileType { .. } => ApiError::UnsupportedFileType,
            ExtractionError::Ocr(e) if e.is_input_error() => ApiError::OcrFailed(e),
            ExtractionError::Ocr(e) => ApiError::Internal(anyhow::Error::new(e)),
            ExtractionError::TaskFailed(msg) => ApiError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
