//! PDF text extraction wrapper
//!
//! Wraps the pdf-extract crate. Encrypted, scanned or corrupted PDFs are
//! reported as errors; the caller decides whether to degrade to empty text.

use anyhow::{anyhow, Context, Result};
use std::panic::{self, AssertUnwindSafe};

/// Extract full text from PDF bytes
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String> {
    if pdf_bytes.is_empty() {
        return Err(anyhow!("PDF is empty"));
    }

    // pdf-extract panics on some malformed inputs instead of returning Err
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(pdf_bytes)
    }))
    .map_err(|_| anyhow!("PDF parser panicked on malformed input"))?;

    let text = outcome.context("Failed to extract text from PDF")?;
    Ok(clean_pdf_text(&text))
}

/// Drop NULs and byte-order marks that some producers leave in text runs
fn clean_pdf_text(text: &str) -> String {
    text.replace(['\u{0}', '\u{FEFF}'], "")
}
