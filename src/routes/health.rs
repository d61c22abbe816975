// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints, readiness reporting the loaded artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use bioaligned_core::constants::endpoints;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH, get(Self::health_handler))
            .route(endpoints::READY, get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    // Artifacts are loaded before the listener binds, so a reachable server is ready.
    async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "service": resources.config.server_name,
            "version": resources.config.server_version,
            "model": {
                "scaler": resources.pipeline.scaler_kind(),
                "classifier": resources.pipeline.classifier_kind()
            }
        }))
    }
}
