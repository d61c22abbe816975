// ABOUTME: Shared read-only resources handed to every route handler
// ABOUTME: Holds the loaded recommendation pipeline and server configuration behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use crate::config::environment::ServerConfig;
use bioaligned_intelligence::{ArtifactError, RecommendationPipeline};
use std::sync::Arc;
use tracing::info;

/// Process-wide state built once at startup
///
/// Nothing in here is mutated after construction, so handlers share it
/// through `Arc` without locking.
#[derive(Clone)]
pub struct ServerResources {
    /// Fitted scaler and classifier
    pub pipeline: Arc<RecommendationPipeline>,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap an already-built pipeline
    #[must_use]
    pub fn new(pipeline: RecommendationPipeline, config: ServerConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config: Arc::new(config),
        }
    }

    /// Load both artifacts named by the configuration
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if either artifact is missing or invalid.
    pub fn load(config: ServerConfig) -> Result<Self, ArtifactError> {
        let pipeline =
            RecommendationPipeline::load(&config.model.model_path, &config.model.scaler_path)?;
        info!(
            scaler = pipeline.scaler_kind(),
            classifier = pipeline.classifier_kind(),
            "Recommendation pipeline ready"
        );
        Ok(Self::new(pipeline, config))
    }
}
