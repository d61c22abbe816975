// ABOUTME: Multinomial logistic regression scorer for intensity tiers
// ABOUTME: Softmax over per-class linear scores of the scaled feature row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use super::{normalize, ClassProbabilities, IntensityClassifier};
use crate::errors::{ArtifactError, InferenceError};
use bioaligned_core::constants::model::{CLASS_COUNT, FEATURE_COUNT};
use bioaligned_core::models::FeatureRow;
use serde::{Deserialize, Serialize};

const ARTIFACT: &str = "logistic_regression";

/// Fitted multinomial logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One row of feature weights per class
    pub coefficients: Vec<Vec<f64>>,
    /// One bias per class
    pub intercepts: Vec<f64>,
}

impl LogisticRegression {
    /// Check dimensions and that every parameter is finite
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] on a shape mismatch or non-finite weight.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.coefficients.len() != CLASS_COUNT {
            return Err(ArtifactError::shape(
                ARTIFACT,
                "coefficient rows",
                CLASS_COUNT,
                self.coefficients.len(),
            ));
        }
        if let Some(row) = self
            .coefficients
            .iter()
            .find(|row| row.len() != FEATURE_COUNT)
        {
            return Err(ArtifactError::shape(
                ARTIFACT,
                "coefficients per row",
                FEATURE_COUNT,
                row.len(),
            ));
        }
        if self.intercepts.len() != CLASS_COUNT {
            return Err(ArtifactError::shape(
                ARTIFACT,
                "intercepts",
                CLASS_COUNT,
                self.intercepts.len(),
            ));
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|w| w.is_finite());
        if !all_finite {
            return Err(ArtifactError::invalid(ARTIFACT, "non-finite weight"));
        }
        Ok(())
    }

    fn decision_function(&self, features: &FeatureRow) -> ClassProbabilities {
        let mut scores = [0.0; CLASS_COUNT];
        for ((score, weights), intercept) in scores
            .iter_mut()
            .zip(&self.coefficients)
            .zip(&self.intercepts)
        {
            *score = weights
                .iter()
                .zip(features)
                .fold(*intercept, |acc, (w, x)| w.mul_add(*x, acc));
        }
        scores
    }
}

impl IntensityClassifier for LogisticRegression {
    fn predict_proba(&self, features: &FeatureRow) -> Result<ClassProbabilities, InferenceError> {
        let scores = self.decision_function(features);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(InferenceError::NonFinite {
                stage: "classifier",
                column: scores.iter().position(|s| !s.is_finite()).unwrap_or(0),
            });
        }
        normalize(scores.map(|s| (s - max).exp()))
    }

    fn kind(&self) -> &'static str {
        ARTIFACT
    }
}
