pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_ats_score;
use crate::compiler::handlers::handle_compile;
use crate::optimize::handlers::{handle_email_optimize, handle_optimize};
use crate::state::AppState;

/// Request bodies are capped at 1 MiB.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ats-score", post(handle_ats_score))
        .route("/api/compile", post(handle_compile))
        .route("/api/optimize", post(handle_optimize))
        .route("/api/email-optimize", post(handle_email_optimize))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::LatexCompiler;
    use crate::config::Config;
    use crate::llm_client::LlmClient;

    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            client_origins: vec!["*".to_string()],
            gemini_api_key: String::new(),
            gemini_model: "models/gemini-2.5-flash".to_string(),
            tectonic_path: "/nonexistent/engine/binary".to_string(),
            request_timeout_ms: 1_000,
            rust_log: "info".to_string(),
        };
        AppState {
            llm: LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone()),
            compiler: LatexCompiler::new(config.tectonic_path.clone()),
            config,
        }
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "tailor-api");
    }

    #[tokio::test]
    async fn test_ats_score_round_trip() {
        let body =
            r#"{"jd": "Rust engineer with tokio", "resume": "Rust engineer shipping services on tokio"}"#;
        let response = build_router(test_state())
            .oneshot(json_post("/api/ats-score", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["coverage"], 100);
        assert!(json["matchedKeywords"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("rust")));
        assert!(json["missingKeywords"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ats_score_tolerates_missing_fields() {
        let response = build_router(test_state())
            .oneshot(json_post("/api/ats-score", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["coverage"], 0);
    }

    #[tokio::test]
    async fn test_compile_rejects_empty_latex() {
        let response = build_router(test_state())
            .oneshot(json_post("/api/compile", r#"{"latex": "   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_compile_reports_missing_engine_as_unavailable() {
        let body = r#"{"latex": "\\documentclass{article}"}"#;
        let response = build_router(test_state())
            .oneshot(json_post("/api/compile", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ENGINE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_optimize_without_key_is_503() {
        let body = r#"{"jd": "Rust role", "resume": "\\documentclass{article}"}"#;
        let response = build_router(test_state())
            .oneshot(json_post("/api/optimize", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "LLM_KEY_MISSING");
    }

    #[tokio::test]
    async fn test_optimize_validates_inputs_first() {
        let response = build_router(test_state())
            .oneshot(json_post("/api/optimize", r#"{"jd": "", "resume": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_email_optimize_validates_inputs_first() {
        let body = r#"{"description": "role", "template": ""}"#;
        let response = build_router(test_state())
            .oneshot(json_post("/api/email-optimize", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
