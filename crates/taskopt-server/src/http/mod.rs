//! HTTP server for the task service.
//!
//! Provides endpoints for:
//! - Pending task list (`GET /tasks`)
//! - Task submission (`POST /tasks`)
//! - Profit optimization (`POST /tasks/execution`)
//! - Health check (`/health`)
//! - Prometheus metrics (`/metrics`)

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

mod error;
mod handlers;
pub mod responses;

pub use error::ApiError;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer for browser tooling
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        // API routes
        .route("/tasks", get(handlers::list_tasks).post(handlers::add_tasks))
        .route("/tasks/execution", post(handlers::execute_tasks))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;

    async fn send(state: &Arc<AppState>, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = create_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn post_tasks(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/tasks")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_task_body_is_bad_request() {
        let state = AppState::new(&Config::default());

        for body in [
            "not json",
            r#"[{"name": "a", "resources": ["r1"], "profit": "lots"}]"#,
            r#"{"name": "a", "resources": [], "profit": 1.0}"#,
        ] {
            let (status, bytes) = send(&state, post_tasks(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");

            let error: Value = serde_json::from_slice(&bytes).unwrap();
            assert!(
                error["error"].as_str().is_some_and(|e| !e.is_empty()),
                "body: {body}"
            );
        }

        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let state = AppState::new(&Config::default());
        let request = Request::builder()
            .method("POST")
            .uri("/tasks")
            .body(Body::from(r#"[{"name": "a", "resources": [], "profit": 1.0}]"#))
            .unwrap();

        let (status, _) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_execute_and_list_through_router() {
        let state = AppState::new(&Config::default());

        let (status, bytes) = send(
            &state,
            post_tasks(
                r#"[
                    {"name": "render", "resources": ["gpu"], "profit": 5},
                    {"name": "train", "resources": ["gpu", "disk"], "profit": 8},
                    {"name": "email", "resources": ["smtp"], "profit": 1}
                ]"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let appended: responses::AppendResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(appended.pool_size, 3);

        let execute = Request::builder()
            .method("POST")
            .uri("/tasks/execution")
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(&state, execute).await;
        assert_eq!(status, StatusCode::OK);
        let winners: Value = serde_json::from_slice(&bytes).unwrap();
        let names: Vec<&str> = winners
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec!["train", "email"]);

        let (status, bytes) = send(&state, get("/tasks")).await;
        assert_eq!(status, StatusCode::OK);
        let remaining: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(remaining[0]["name"], "render");
        assert_eq!(remaining.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_health_reports_pending_tasks() {
        let state = AppState::new(&Config::default());
        send(
            &state,
            post_tasks(r#"[{"name": "a", "resources": [], "profit": 1}]"#),
        )
        .await;

        let (status, bytes) = send(&state, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let health: responses::HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.pending_tasks, 1);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_is_prometheus_text() {
        let state = AppState::new(&Config::default());
        let response = create_router(state).oneshot(get("/metrics")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("# TYPE taskopt_task_list_size gauge"));
    }
}
