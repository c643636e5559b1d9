//! HTTP API module
//!
//! This module contains the endpoint handlers, response structures, and
//! router assembly.

pub mod handlers;
pub mod responses;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::REQUEST_TIMEOUT;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greet_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn fetch(path: &str) -> (StatusCode, String) {
        let response = create_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn greets_by_name() {
        let (status, body) = fetch("/?name=World").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, World\n");
    }

    #[tokio::test]
    async fn absent_name_defaults_to_guest() {
        let (status, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, Guest\n");
    }

    #[tokio::test]
    async fn empty_name_defaults_to_guest() {
        let (_, body) = fetch("/?name=").await;
        assert_eq!(body, "Hello, Guest\n");
    }

    #[tokio::test]
    async fn percent_encoded_names_are_decoded() {
        let (_, body) = fetch("/?name=Rust%20Fans").await;
        assert_eq!(body, "Hello, Rust Fans\n");
    }

    #[tokio::test]
    async fn repeated_requests_return_identical_bodies() {
        let (_, first) = fetch("/?name=World").await;
        let (_, second) = fetch("/?name=World").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _) = fetch("/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = fetch("/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["version"], "0.1.0");
    }
}
