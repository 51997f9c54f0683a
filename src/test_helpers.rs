/*!
 * Test Helpers and Utilities
 *
 * Builds configurations, state and routers with sensible defaults for unit
 * and integration tests. Tests can modify the returned objects as needed.
 */

use axum::Router;
use std::sync::Arc;

use crate::{build_router, config::Config, AppState};

/// Creates a test configuration with sensible defaults
/// All fields are populated to avoid compilation errors when new fields are added
pub fn create_test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        // never exists, so tests do not depend on UI assets
        static_dir: "/nonexistent/postwise-static".to_string(),
        max_file_size_mb: 1,
        cors_allow_any: true,

        // OCR Configuration
        ocr_enabled: false,
        ocr_language: "eng".to_string(),
    }
}

/// Creates a test AppState with default configuration
pub fn create_test_app_state() -> Arc<AppState> {
    create_test_app_state_with_config(create_test_config())
}

/// Creates a test AppState with a custom configuration
pub fn create_test_app_state_with_config(config: Config) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}

/// Creates the full router over fresh test state, returning the state too so
/// tests can inspect metrics
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = create_test_app_state();
    (build_router(state.clone()), state)
}

/// Build a `multipart/form-data` body with one file field.
/// Returns the content-type header value and the body.
pub fn multipart_body(field: &str, filename: &str, contents: &[u8]) -> (String, Vec<u8>) {
    let boundary = "postwise-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}

/// A minimal single-page PDF that shows `text` in Helvetica.
/// Cross-reference offsets are computed so strict parsers accept it.
pub fn minimal_pdf(text: &str) -> Vec<u8> {
    let stream = format!("BT\n/F1 24 Tf\n72 720 Td\n({}) Tj\nET", text);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
        format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}
