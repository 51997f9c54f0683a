//! Process-wide request counters exposed on `/metrics`

use std::sync::atomic::{AtomicU64, Ordering};

use crate::analyzer::{Suggestion, SuggestionKind};
use crate::utils::file_type::FileKind;

#[derive(Debug, Default)]
pub struct AppMetrics {
    analyses_total: AtomicU64,
    empty_analyses_total: AtomicU64,
    suggestions_total: AtomicU64,
    pdf_uploads_total: AtomicU64,
    text_uploads_total: AtomicU64,
    image_uploads_total: AtomicU64,
    rejected_uploads_total: AtomicU64,
    pdf_parse_fallbacks_total: AtomicU64,
    ocr_failures_total: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub analyses_total: u64,
    pub empty_analyses_total: u64,
    pub suggestions_total: u64,
    pub pdf_uploads_total: u64,
    pub text_uploads_total: u64,
    pub image_uploads_total: u64,
    pub rejected_uploads_total: u64,
    pub pdf_parse_fallbacks_total: u64,
    pub ocr_failures_total: u64,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_analysis(&self, suggestions: &[Suggestion]) {
        self.analyses_total.fetch_add(1, Ordering::Relaxed);
        self.suggestions_total
            .fetch_add(suggestions.len() as u64, Ordering::Relaxed);
        if suggestions.iter().any(|s| s.kind == SuggestionKind::Empty) {
            self.empty_analyses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_upload(&self, kind: FileKind, recovered_from_error: bool) {
        let counter = match kind {
            FileKind::Pdf => &self.pdf_uploads_total,
            FileKind::Text => &self.text_uploads_total,
            FileKind::Image => &self.image_uploads_total,
            FileKind::Unsupported => &self.rejected_uploads_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        if recovered_from_error {
            self.pdf_parse_fallbacks_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rejected_upload(&self) {
        self.rejected_uploads_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ocr_failure(&self) {
        self.ocr_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            analyses_total: self.analyses_total.load(Ordering::Relaxed),
            empty_analyses_total: self.empty_analyses_total.load(Ordering::Relaxed),
            suggestions_total: self.suggestions_total.load(Ordering::Relaxed),
            pdf_uploads_total: self.pdf_uploads_total.load(Ordering::Relaxed),
            text_uploads_total: self.text_uploads_total.load(Ordering::Relaxed),
            image_uploads_total: self.image_uploads_total.load(Ordering::Relaxed),
            rejected_uploads_total: self.rejected_uploads_total.load(Ordering::Relaxed),
            pdf_parse_fallbacks_total: self.pdf_parse_fallbacks_total.load(Ordering::Relaxed),
            ocr_failures_total: self.ocr_failures_total.load(Ordering::Relaxed),
        }
    }
}
