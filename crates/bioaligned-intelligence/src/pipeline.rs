// ABOUTME: Immutable scaler + classifier pipeline turning requests into recommendations
// ABOUTME: Loaded once at startup and shared read-only across all requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Recommendation Pipeline
//!
//! `feature row -> scaler -> classifier -> response`. The pipeline holds no
//! mutable state, so a single instance behind an `Arc` serves every request.

use crate::artifacts::{load_classifier, load_scaler};
use crate::classifier::{ClassifierModel, IntensityClassifier, Prediction};
use crate::errors::{ArtifactError, InferenceError};
use crate::scaling::FeatureScaler;
use bioaligned_core::errors::AppResult;
use bioaligned_core::models::{FeatureRow, PredictionRequest, PredictionResponse};
use std::path::Path;
use tracing::debug;

/// Fitted scaler and classifier applied to every prediction request
pub struct RecommendationPipeline {
    scaler: FeatureScaler,
    classifier: Box<dyn IntensityClassifier>,
}

impl RecommendationPipeline {
    /// Build a pipeline from already-validated parts
    #[must_use]
    pub fn new(scaler: FeatureScaler, classifier: Box<dyn IntensityClassifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Build a pipeline from a serialized classifier, validating both parts
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if either part fails validation.
    pub fn from_models(
        scaler: FeatureScaler,
        classifier: ClassifierModel,
    ) -> Result<Self, ArtifactError> {
        scaler.validate()?;
        classifier.validate()?;
        Ok(Self::new(scaler, Box::new(classifier)))
    }

    /// Load both artifacts from disk
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if either file is unreadable, malformed or invalid.
    pub fn load(model_path: &Path, scaler_path: &Path) -> Result<Self, ArtifactError> {
        let scaler = load_scaler(scaler_path)?;
        let classifier = load_classifier(model_path)?;
        Ok(Self::new(scaler, Box::new(classifier)))
    }

    /// Kind of the loaded scaler
    #[must_use]
    pub fn scaler_kind(&self) -> &'static str {
        self.scaler.kind()
    }

    /// Kind of the loaded classifier
    #[must_use]
    pub fn classifier_kind(&self) -> &'static str {
        self.classifier.kind()
    }

    /// Scale and classify one feature row
    ///
    /// # Errors
    ///
    /// Returns an [`InferenceError`] if scaling or classification yields non-finite values.
    pub fn predict_features(&self, features: &FeatureRow) -> Result<Prediction, InferenceError> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict(&scaled)
    }

    /// Produce the wire response for a validated request
    ///
    /// # Errors
    ///
    /// Returns an `AppError` with an inference error code if scoring fails.
    pub fn recommend(&self, request: &PredictionRequest) -> AppResult<PredictionResponse> {
        let features = request.feature_row();
        let prediction = self.predict_features(&features)?;

        debug!(
            phase_code = request.phase_code(),
            tier = %prediction.tier,
            probabilities = ?prediction.probabilities,
            "Scored prediction request"
        );

        Ok(PredictionResponse::new(
            prediction.tier,
            prediction.probabilities,
        ))
    }
}
