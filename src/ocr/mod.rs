pub mod error;

pub use error::OcrError;

#[cfg(feature = "ocr")]
use tesseract::Tesseract;

/// Configuration for the OCR service
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub enabled: bool,
    /// Tesseract language code, e.g. "eng" or "eng+deu"
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "eng".to_string(),
        }
    }
}

/// Server-side image OCR.
///
/// Browsers normally OCR images themselves and send the text; this is the
/// fallback for clients that upload the image instead. Calls block, so run
/// them on a blocking thread.
#[derive(Debug, Clone)]
pub struct OcrService {
    config: OcrConfig,
}

impl OcrService {
    pub fn new() -> Self {
        Self::new_with_config(OcrConfig::default())
    }

    pub fn new_with_config(config: OcrConfig) -> Self {
        Self { config }
    }

    /// True when this build can OCR and the configuration allows it
    pub fn is_available(&self) -> bool {
        cfg!(feature = "ocr") && self.config.enabled
    }

    pub fn language(&self) -> &str {
        &self.config.language
    }

    pub fn extract_text_from_image_bytes(&self, data: &[u8]) -> Result<String, OcrError> {
        if !self.config.enabled {
            return Err(OcrError::Disabled);
        }
        self.recognize(data)
    }

    #[cfg(feature = "ocr")]
    fn recognize(&self, data: &[u8]) -> Result<String, OcrError> {
        let lang = self.config.language.as_str();

        let tesseract = Tesseract::new(None, Some(lang)).map_err(|e| OcrError::InitializationFailed {
            lang: lang.to_string(),
            details: e.to_string(),
        })?;

        let mut tesseract = tesseract
            .set_image_from_mem(data)
            .map_err(|e| OcrError::InvalidImage { details: e.to_string() })?;

        let text = tesseract
            .get_text()
            .map_err(|e| OcrError::RecognitionFailed { details: e.to_string() })?;

        Ok(text.trim().to_string())
    }

    #[cfg(not(feature = "ocr"))]
    fn recognize(&self, _data: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::TesseractNotInstalled)
    }
}

impl Default for OcrService {
    fn default() -> Self {
        Self::new()
    }
}
