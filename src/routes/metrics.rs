use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::fmt::Write;
use std::sync::Arc;

use crate::{metrics::MetricsSnapshot, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_prometheus_metrics))
}

/// Returns metrics in Prometheus text format (text/plain; version=0.0.4)
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus metrics in text format", content_type = "text/plain; version=0.0.4")
    )
)]
pub async fn get_prometheus_metrics(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!("Prometheus: get_prometheus_metrics endpoint called");

    let timestamp = chrono::Utc::now().timestamp_millis();
    let output = render_metrics(&state.metrics.snapshot(), timestamp);

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        output,
    )
        .into_response()
}

fn write_counter(output: &mut String, name: &str, help: &str, value: u64, timestamp: i64) {
    // Writing into a String cannot fail
    let _ = writeln!(output, "# HELP {} {}", name, help);
    let _ = writeln!(output, "# TYPE {} counter", name);
    let _ = writeln!(output, "{} {} {}", name, value, timestamp);
}

pub fn render_metrics(snapshot: &MetricsSnapshot, timestamp: i64) -> String {
    let mut output = String::new();

    // Analysis metrics
    write_counter(&mut output, "postwise_analyses_total", "Posts analyzed", snapshot.analyses_total, timestamp);
    write_counter(
        &mut output,
        "postwise_empty_analyses_total",
        "Analyses that found no text",
        snapshot.empty_analyses_total,
        timestamp,
    );
    write_counter(
        &mut output,
        "postwise_suggestions_total",
        "Suggestions returned",
        snapshot.suggestions_total,
        timestamp,
    );

    // Upload metrics
    write_counter(&mut output, "postwise_pdf_uploads_total", "PDF uploads extracted", snapshot.pdf_uploads_total, timestamp);
    write_counter(&mut output, "postwise_text_uploads_total", "Text uploads extracted", snapshot.text_uploads_total, timestamp);
    write_counter(
        &mut output,
        "postwise_image_uploads_total",
        "Image uploads OCR'd on the server",
        snapshot.image_uploads_total,
        timestamp,
    );
    write_counter(
        &mut output,
        "postwise_rejected_uploads_total",
        "Uploads rejected as unsupported",
        snapshot.rejected_uploads_total,
        timestamp,
    );
    write_counter(
        &mut output,
        "postwise_pdf_parse_fallbacks_total",
        "PDFs that could not be parsed and returned empty text",
        snapshot.pdf_parse_fallbacks_total,
        timestamp,
    );
    write_counter(&mut output, "postwise_ocr_failures_total", "Failed OCR attempts", snapshot.ocr_failures_total, timestamp);

    output
}
