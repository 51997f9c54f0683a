//! Integration tests for `/api/upload`
//!
//! These tests verify that:
//! 1. Text files come back verbatim
//! 2. PDFs are parsed, and unreadable PDFs degrade to empty text
//! 3. Unsupported types, missing files and oversized bodies are rejected
//!    with a `{"error": ...}` body

#[cfg(test)]
mod upload_route_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use postwise::test_helpers::{create_test_app, minimal_pdf, multipart_body};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn upload_request(field: &str, filename: &str, contents: &[u8]) -> Request<Body> {
        let (content_type, body) = multipart_body(field, filename, contents);
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_text_upload_returns_contents() {
        let (app, state) = create_test_app();

        let response = app
            .oneshot(upload_request("file", "post.txt", "Big news today!\nStay tuned.".as_bytes()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["text"], "Big news today!\nStay tuned.");
        assert_eq!(body["file_type"], "text");
        assert_eq!(body["word_count"], 5);

        assert_eq!(state.metrics.snapshot().text_uploads_total, 1);
    }

    #[tokio::test]
    async fn test_pdf_upload_extracts_text() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(upload_request("file", "post.pdf", &minimal_pdf("Hello from a PDF")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["file_type"], "pdf");
        assert!(
            body["text"].as_str().unwrap().contains("Hello"),
            "unexpected text: {}",
            body["text"]
        );
    }

    #[tokio::test]
    async fn test_corrupt_pdf_returns_empty_text() {
        let (app, state) = create_test_app();

        let response = app
            .oneshot(upload_request("file", "broken.PDF", b"%PDF-1.4 this is not really a pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["text"], "");

        let snapshot = state.metrics.snapshot();
        assert_eq!(snapshot.pdf_uploads_total, 1);
        assert_eq!(snapshot.pdf_parse_fallbacks_total, 1);
    }

    #[tokio::test]
    async fn test_unsupported_type_is_rejected() {
        let (app, state) = create_test_app();

        let response = app
            .oneshot(upload_request("file", "draft.docx", b"PK\x03\x04 pretend docx"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Unsupported file type. Use PDF or TXT." })
        );
        assert_eq!(state.metrics.snapshot().rejected_uploads_total, 1);
    }

    #[tokio::test]
    async fn test_image_is_rejected_without_server_ocr() {
        let (app, _) = create_test_app();
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

        let response = app
            .oneshot(upload_request("file", "photo.png", &png))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_field_name_means_no_file() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(upload_request("attachment", "post.txt", b"hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "No file uploaded" }));
    }

    #[tokio::test]
    async fn test_non_multipart_body_means_no_file() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "No file uploaded" }));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        // test config caps uploads at 1 MB
        let (app, _) = create_test_app();
        let big = vec![b'a'; 2 * 1024 * 1024];

        let response = app
            .oneshot(upload_request("file", "huge.txt", &big))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json_body(response).await, json!({ "error": "File too large (max 1 MB)" }));
    }

    #[tokio::test]
    async fn test_extension_less_pdf_is_sniffed() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(upload_request("file", "scan", b"%PDF-1.4 junk"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["file_type"], "pdf");
    }
}
