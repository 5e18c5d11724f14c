pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/resumes/parse-pdf", post(handlers::handle_parse_pdf))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extract::pdf::single_page_pdf;

    const BOUNDARY: &str = "skillscan-test-boundary";

    fn test_app(skills: &str) -> Router {
        test_app_with(&[("REQUIRED_SKILLS", skills)])
    }

    fn test_app_with(vars: &[(&str, &str)]) -> Router {
        let config = Config::from_vars(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        build_router(AppState::new(config))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(parts: &[(&str, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            if *name == "file" {
                body.extend_from_slice(
                    b"Content-Disposition: form-data; name=\"file\"; filename=\"resume.pdf\"\r\n\
                      Content-Type: application/pdf\r\n\r\n",
                );
            } else {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resumes/parse-pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app("Rust")
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_skills_returns_configured_vocabulary() {
        let response = test_app("Rust, Machine Learning")
            .oneshot(Request::get("/api/v1/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "required_skills": ["Rust", "Machine Learning"] })
        );
    }

    #[tokio::test]
    async fn test_parse_with_default_vocabulary() {
        let request = json_request(
            "/api/v1/resumes/parse",
            json!({ "resume_text": "Jane Doe\njane@example.com\nI used Python and did some machine learning work" }),
        );
        let response = test_app("Python,Machine Learning,Rust")
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "text");
        assert_eq!(body["resume"]["name"], "Jane Doe");
        assert_eq!(body["resume"]["emails"], json!(["jane@example.com"]));
        assert_eq!(
            body["resume"]["skills_found"],
            json!(["machine learning", "python"])
        );
        assert_eq!(body["resume"]["skill_match"]["percent"], 66.67);
        assert_eq!(body["resume"]["skill_match"]["missing"], json!(["Rust"]));
        assert!(body["scan_id"].is_string());
    }

    #[tokio::test]
    async fn test_parse_with_request_vocabulary() {
        let request = json_request(
            "/api/v1/resumes/parse",
            json!({
                "resume_text": "Built data structures in Rust",
                "required_skills": ["Rust", "Data Structures"]
            }),
        );
        let response = test_app("Java").oneshot(request).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["resume"]["skill_match"]["percent"], 100.0);
        assert_eq!(body["resume"]["skill_match"]["required_count"], 2);
    }

    #[tokio::test]
    async fn test_parse_with_empty_vocabulary_scores_zero() {
        let request = json_request(
            "/api/v1/resumes/parse",
            json!({ "resume_text": "Python", "required_skills": [] }),
        );
        let response = test_app("Python").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["resume"]["skill_match"]["percent"], 0.0);
        assert_eq!(body["resume"]["skills_found"], json!([]));
    }

    #[tokio::test]
    async fn test_parse_rejects_blank_text() {
        let request = json_request("/api/v1/resumes/parse", json!({ "resume_text": "  \n " }));
        let response = test_app("Rust").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_pdf_requires_file_part() {
        let request = multipart_request(&[("skill", b"Rust")]);
        let response = test_app("Rust").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_pdf_rejects_unreadable_pdf() {
        let request = multipart_request(&[("file", b"definitely not a pdf")]);
        let response = test_app("Rust").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "UNPROCESSABLE_ENTITY"
        );
    }

    #[tokio::test]
    async fn test_parse_pdf_scans_text_with_skill_overrides() {
        let pdf = single_page_pdf(&["Jane Doe", "Skilled in Rust and machine learning"]);
        let request = multipart_request(&[
            ("skill", b"Rust"),
            ("skill", b"   "),
            ("skill", b"Machine Learning"),
            ("file", &pdf),
        ]);
        let response = test_app("Java,SQL").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "pdf");
        assert_eq!(body["resume"]["name"], "Jane Doe");
        assert_eq!(
            body["resume"]["skills_found"],
            json!(["machine learning", "rust"])
        );
        assert_eq!(body["resume"]["skill_match"]["required_count"], 2);
        assert_eq!(
            body["resume"]["skill_match"]["matched"],
            json!(["Rust", "Machine Learning"])
        );
        assert_eq!(body["resume"]["skill_match"]["percent"], 100.0);
    }

    #[tokio::test]
    async fn test_parse_pdf_without_skills_uses_configured_vocabulary() {
        let pdf = single_page_pdf(&["Jane Doe", "Skilled in Rust and machine learning"]);
        let request = multipart_request(&[("file", &pdf)]);
        let response = test_app("Rust,Java").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["resume"]["skills_found"], json!(["rust"]));
        assert_eq!(body["resume"]["skill_match"]["missing"], json!(["Java"]));
        assert_eq!(body["resume"]["skill_match"]["percent"], 50.0);
    }

    #[tokio::test]
    async fn test_parse_pdf_over_upload_limit_is_rejected() {
        let oversized = vec![b'x'; 4 * 1024];
        let request = multipart_request(&[("file", &oversized)]);
        let app = test_app_with(&[("REQUIRED_SKILLS", "Rust"), ("MAX_UPLOAD_BYTES", "1024")]);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "PAYLOAD_TOO_LARGE"
        );
    }

    #[tokio::test]
    async fn test_parse_pdf_without_text_is_unprocessable() {
        let pdf = single_page_pdf(&[]);
        let request = multipart_request(&[("file", &pdf)]);
        let response = test_app("Rust").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "UNPROCESSABLE_ENTITY"
        );
    }
}
