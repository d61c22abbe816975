// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Provides request IDs, CORS configuration and JSON transport rejections for the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

/// CORS configuration
pub mod cors;
/// JSON bodies for transport-level rejections
pub mod rejection;
/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use rejection::json_rejection_middleware;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
