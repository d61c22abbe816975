// ABOUTME: Rewrites transport-level rejections into the API's JSON error object
// ABOUTME: Covers body-limit (413) and timeout (408) responses produced by tower layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use crate::errors::AppError;
use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{header::CONTENT_TYPE, StatusCode};

/// Replace non-JSON 413 and 408 responses with `{"error": ...}` bodies
///
/// Handler errors already carry a JSON body and pass through untouched.
pub async fn json_rejection_middleware(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;

    if is_json(&response) {
        return response;
    }

    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::payload_too_large().into_response(),
        StatusCode::REQUEST_TIMEOUT => AppError::request_timeout().into_response(),
        _ => response,
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Json, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn router() -> Router {
        Router::new()
            .route("/plain-timeout", get(|| async { StatusCode::REQUEST_TIMEOUT }))
            .route(
                "/plain-too-large",
                get(|| async { (StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded") }),
            )
            .route(
                "/json-too-large",
                get(|| async {
                    (
                        StatusCode::PAYLOAD_TOO_LARGE,
                        Json(json!({"error": "custom"})),
                    )
                }),
            )
            .route("/ok", get(|| async { "fine" }))
            .layer(middleware::from_fn(json_rejection_middleware))
    }

    async fn call(path: &str) -> Response {
        router()
            .oneshot(http::Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_timeout_becomes_json() {
        let response = call("/plain-timeout").await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_json(response).await, json!({"error": "Request timed out"}));
    }

    #[tokio::test]
    async fn test_text_body_limit_becomes_json() {
        let response = call("/plain-too-large").await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Request body too large"})
        );
    }

    #[tokio::test]
    async fn test_json_errors_pass_through() {
        let response = call("/json-too-large").await;
        assert_eq!(body_json(response).await, json!({"error": "custom"}));

        let response = call("/ok").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
