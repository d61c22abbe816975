// ABOUTME: Request ID middleware that tags every request and response with a correlation ID
// ABOUTME: Reuses a caller-supplied x-request-id or generates a UUID v4, then opens a tracing span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied ID that is reused as-is
const MAX_INCOMING_ID_LEN: usize = 128;

/// Correlation ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Fresh random ID
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_header(value: &HeaderValue) -> Option<Self> {
        let raw = value.to_str().ok()?.trim();
        if raw.is_empty() || raw.len() > MAX_INCOMING_ID_LEN {
            return None;
        }
        Some(Self(raw.to_owned()))
    }
}

/// Attach a request ID to the request, a span around the handler, and the response header
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(RequestId::from_header)
        .unwrap_or_else(RequestId::generate);

    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
