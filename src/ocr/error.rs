use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Server-side OCR is not available in this build (compile with the `ocr` feature)")]
    TesseractNotInstalled,

    #[error("Server-side OCR is disabled by configuration")]
    Disabled,

    #[error("Failed to initialize Tesseract for language '{lang}': {details}")]
    InitializationFailed { lang: String, details: String },

    #[error("Could not decode image: {details}")]
    InvalidImage { details: String },

    #[error("Text recognition failed: {details}")]
    RecognitionFailed { details: String },
}

impl OcrError {
    /// Whether the error comes from the image itself rather than the server
    pub fn is_input_error(&self) -> bool {
        matches!(self, OcrError::InvalidImage { .. } | OcrError::RecognitionFailed { .. })
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OcrError::TesseractNotInstalled => "OCR_NOT_INSTALLED",
            OcrError::Disabled => "OCR_DISABLED",
            OcrError::InitializationFailed { .. } => "OCR_INIT_FAILED",
            OcrError::InvalidImage { .. } => "OCR_INVALID_IMAGE",
            OcrError::RecognitionFailed { .. } => "OCR_RECOGNITION_FAILED",
        }
    }
}
