pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route("/api/v1/analysis/current", get(handlers::handle_current))
        .route("/api/v1/analysis/status", get(handlers::handle_status))
        // Input helpers
        .route(
            "/api/v1/job-description/inspect",
            post(handlers::handle_inspect),
        )
        .route(
            "/api/v1/samples/job-description",
            get(handlers::handle_sample),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::requester::tests::{FixedBackend, SCENARIO_REPLY};
    use crate::analysis::AnalysisRequester;
    use crate::llm_client::LlmError;

    fn app_with(backend: FixedBackend) -> (Router, AppState) {
        let requester = AnalysisRequester::new(Arc::new(backend), Duration::from_secs(30));
        let state = AppState::new(requester);
        (build_router(state.clone()), state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn analyze_body() -> Value {
        json!({
            "job_description": "Senior Engineer... 5 years React, Docker, AWS...",
            "resume_text": "Shipped React front ends on AWS for four years."
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app_with(FixedBackend::replying(SCENARIO_REPLY));
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_result_envelope() {
        let (app, _) = app_with(FixedBackend::replying(SCENARIO_REPLY));
        let response = app
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["result"]["atsScore"], 70);
        assert_eq!(body["result"]["matchedSkills"], json!(["React", "AWS"]));
        assert_eq!(body["result"]["missingSkills"], json!(["Docker"]));
        assert_eq!(body["score_label"], "Good");
        assert_eq!(
            body["summary"],
            "Your resume scored 70/100 for ATS compatibility."
        );
        assert_eq!(body["categories"][0]["subject"], "Technical Skills");
        assert_eq!(body["categories"][0]["score"], 80);
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected_before_backend_call() {
        let backend = FixedBackend::replying(SCENARIO_REPLY);
        let requester_backend = Arc::new(backend);
        let requester = AnalysisRequester::new(requester_backend.clone(), Duration::from_secs(30));
        let app = build_router(AppState::new(requester));

        let response = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "job_description": "   ", "resume_text": "Rust" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            requester_backend
                .calls
                .load(std::sync::atomic::Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    async fn test_malformed_reply_is_bad_gateway() {
        let (app, state) = app_with(FixedBackend::replying("no json here"));
        let response = app
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await["error"]["code"],
            "ANALYSIS_RESPONSE_INVALID"
        );
        assert!(state.session.current().is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_is_bad_gateway() {
        let (app, _) = app_with(FixedBackend::failing(LlmError::Api {
            status: 500,
            message: "internal".to_string(),
        }));
        let response = app
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await["error"]["code"],
            "ANALYSIS_BACKEND_FAILED"
        );
    }

    #[tokio::test]
    async fn test_current_is_404_then_latest_result() {
        let (app, _) = app_with(FixedBackend::replying(SCENARIO_REPLY));

        let response = app
            .clone()
            .oneshot(get("/api/v1/analysis/current"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        let posted = read_json(response).await;

        let response = app.oneshot(get("/api/v1/analysis/current")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let current = read_json(response).await;
        assert_eq!(current["request_id"], posted["request_id"]);
        assert_eq!(current["result"]["atsScore"], 70);
    }

    #[tokio::test]
    async fn test_concurrent_analysis_is_conflict() {
        let (app, state) = app_with(FixedBackend::replying(SCENARIO_REPLY));
        let _held = state.session.try_begin(uuid::Uuid::new_v4()).unwrap();

        let response = app
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            read_json(response).await["error"]["code"],
            "ANALYSIS_IN_PROGRESS"
        );
    }

    #[tokio::test]
    async fn test_status_reflects_session_phase() {
        let (app, state) = app_with(FixedBackend::replying(SCENARIO_REPLY));

        let response = app.clone().oneshot(get("/api/v1/analysis/status")).await.unwrap();
        let body = read_json(response).await;
        assert_eq!(body["phase"], "idle");
        assert_eq!(body["has_result"], false);

        let held = state.session.try_begin(uuid::Uuid::new_v4()).unwrap();
        let response = app.clone().oneshot(get("/api/v1/analysis/status")).await.unwrap();
        assert_eq!(read_json(response).await["phase"], "in_flight");
        drop(held);

        app.clone()
            .oneshot(post_json("/api/v1/analysis", analyze_body()))
            .await
            .unwrap();
        let response = app.oneshot(get("/api/v1/analysis/status")).await.unwrap();
        let body = read_json(response).await;
        assert_eq!(body["phase"], "done");
        assert_eq!(body["has_result"], true);
    }

    #[tokio::test]
    async fn test_inspect_job_description() {
        let (app, _) = app_with(FixedBackend::replying(SCENARIO_REPLY));
        let response = app
            .oneshot(post_json(
                "/api/v1/job-description/inspect",
                json!({ "job_description": "Rust engineer wanted" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["word_count"], 3);
        assert!(body["hint"].is_string());
    }

    #[tokio::test]
    async fn test_sample_job_description() {
        let (app, _) = app_with(FixedBackend::replying(SCENARIO_REPLY));
        let response = app
            .oneshot(get("/api/v1/samples/job-description"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["job_description"]
            .as_str()
            .unwrap()
            .contains("Senior Software Engineer"));
    }
}
