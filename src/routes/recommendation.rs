// ABOUTME: Welcome and workout-intensity prediction route handlers
// ABOUTME: Validates the seven-field payload and runs it through the shared pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Recommendation routes
//!
//! `POST /predict` reads the raw body so that every rejection, including
//! malformed JSON, goes through [`AppError`] and renders `{"error": ...}`.

use crate::{errors::AppError, middleware::RequestId, resources::ServerResources};
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use bioaligned_core::{
    constants::endpoints,
    models::{PredictionRequest, WelcomeResponse},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Welcome and prediction routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the welcome and prediction routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ROOT, get(Self::handle_welcome))
            .route(endpoints::PREDICT, post(Self::handle_predict))
            .with_state(resources)
    }

    async fn handle_welcome() -> Json<WelcomeResponse> {
        Json(WelcomeResponse::default())
    }

    /// Handle a prediction request
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map_or_else(RequestId::generate, |Extension(id)| id);
        let started = Instant::now();

        let request = PredictionRequest::from_slice(&body).map_err(|e| {
            warn!(request_id = %request_id.as_str(), error = %e, "Rejected prediction request");
            AppError::from(e)
        })?;

        let response = resources.pipeline.recommend(&request)?;

        info!(
            request_id = %request_id.as_str(),
            phase_code = request.phase_code(),
            recommendation = %response.recommendation,
            duration_us = started.elapsed().as_micros(),
            "Prediction served"
        );

        Ok(Json(response).into_response())
    }
}
