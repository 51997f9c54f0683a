use axum::body::Body;
use axum::http::{Request, StatusCode};
use postwise::test_helpers::{create_test_app, create_test_app_state_with_config, create_test_config};
use tower::util::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint_responds() {
    let (app, _) = create_test_app();

    let response = get(app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK, "Health endpoint should return 200 OK");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok", "Health status should be 'ok'");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["ocr_available"], false, "Test config disables OCR");
}

#[tokio::test]
async fn test_unknown_route_is_not_found_without_static_dir() {
    let (app, _) = create_test_app();

    let response = get(app, "/index.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = create_test_app();

    let response = get(app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/analyze"].is_object());
    assert!(doc["paths"]["/api/upload"].is_object());
}

#[tokio::test]
async fn test_metrics_endpoint_reports_counters() {
    let (app, state) = create_test_app();
    state.metrics.record_analysis(&postwise::analyze("hello"));

    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("# TYPE postwise_analyses_total counter"));
    assert!(text.contains("postwise_analyses_total 1"));
}

#[cfg(test)]
mod static_files_tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_static_dir_is_served_as_fallback() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>postwise</h1>").unwrap();

        let mut config = create_test_config();
        config.static_dir = dir.path().to_string_lossy().into_owned();
        let app = postwise::build_router(create_test_app_state_with_config(config));

        let response = get(app.clone(), "/index.html").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>postwise</h1>");

        // API routes still win over the fallback
        let response = get(app, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
