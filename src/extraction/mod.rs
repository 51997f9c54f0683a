/*!
 * Upload Text Extraction
 *
 * Turns an uploaded file into plain text. PDFs go through `pdf`, text files
 * are decoded as UTF-8, and images are handed to the OCR service when it is
 * available. Everything here is blocking; `extract_upload` moves the work to
 * the blocking pool.
 */

pub mod pdf;

use serde::Serialize;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::ocr::{OcrError, OcrService};
use crate::utils::file_type::{detect_file_kind, FileKind};

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file type. Use PDF or TXT.")]
    UnsupportedFileType { filename: String, kind: FileKind },

    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error("extraction task failed: {0}")]
    TaskFailed(String),
}

/// Text pulled out of one upload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExtractionResult {
    pub text: String,
    pub file_type: FileKind,
    pub word_count: usize,
    /// The PDF could not be parsed and empty text was substituted
    #[serde(skip)]
    pub recovered_from_error: bool,
    #[serde(skip)]
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    ocr: OcrService,
}

impl TextExtractor {
    pub fn new(ocr: OcrService) -> Self {
        Self { ocr }
    }

    pub fn ocr(&self) -> &OcrService {
        &self.ocr
    }

    /// Extract text from an upload on the current thread
    pub fn extract(&self, filename: &str, data: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let start = Instant::now();
        let kind = detect_file_kind(filename, data);
        debug!("Extracting '{}' ({} bytes) as {}", filename, data.len(), kind);

        let (text, recovered_from_error) = match kind {
            FileKind::Pdf => match pdf::extract_text_from_pdf(data) {
                Ok(text) => (text, false),
                Err(e) => {
                    // Best effort: an unreadable PDF still yields a result
                    warn!("PDF parse error for '{}': {:#}", filename, e);
                    (String::new(), true)
                }
            },
            FileKind::Text => (String::from_utf8_lossy(data).into_owned(), false),
            FileKind::Image if self.ocr.is_available() => {
                (self.ocr.extract_text_from_image_bytes(data)?, false)
            }
            FileKind::Image | FileKind::Unsupported => {
                return Err(ExtractionError::UnsupportedFileType {
                    filename: filename.to_string(),
                    kind,
                });
            }
        };

        let result = ExtractionResult {
            word_count: text.split_whitespace().count(),
            text,
            file_type: kind,
            recovered_from_error,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Extracted {} words from '{}' ({}) in {}ms",
            result.word_count, filename, kind, result.processing_time_ms
        );
        Ok(result)
    }

    /// Extract text on the blocking thread pool
    pub async fn extract_upload<B>(&self, filename: String, data: B) -> Result<ExtractionResult, ExtractionError>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let extractor = self.clone();
        tokio::task::spawn_blocking(move || extractor.extract(&filename, data.as_ref()))
            .await
            .map_err(|e| ExtractionError::TaskFailed(e.to_string()))?
    }
}
