// ABOUTME: Intensity classifiers producing a tier and per-class probabilities
// ABOUTME: Trait seam plus the serialized model kinds the service can load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Intensity Classifiers
//!
//! A classifier scores an already-scaled feature row. `predict` is derived from
//! `predict_proba` so the label and the confidence can never disagree: the
//! predicted tier is the arg-max, ties resolved towards the lower index.

/// Random forest of decision trees
pub mod forest;
/// Multinomial logistic regression
pub mod logistic;

pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use logistic::LogisticRegression;

use crate::errors::{ArtifactError, InferenceError};
use bioaligned_core::constants::model::CLASS_COUNT;
use bioaligned_core::models::{FeatureRow, IntensityTier};
use serde::{Deserialize, Serialize};

/// Per-class probabilities in tier order `[Low, Moderate, High]`
pub type ClassProbabilities = [f64; CLASS_COUNT];

/// Scored output of a classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Arg-max tier
    pub tier: IntensityTier,
    /// Normalized class probabilities
    pub probabilities: ClassProbabilities,
}

/// Multi-class classifier over scaled feature rows
pub trait IntensityClassifier: Send + Sync {
    /// Probability of each tier
    ///
    /// # Errors
    ///
    /// Returns an [`InferenceError`] if the model produces non-finite or
    /// degenerate output for this row.
    fn predict_proba(&self, features: &FeatureRow) -> Result<ClassProbabilities, InferenceError>;

    /// Model kind, for logs and readiness output
    fn kind(&self) -> &'static str;

    /// Most probable tier together with the probabilities it was chosen from
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::predict_proba`].
    fn predict(&self, features: &FeatureRow) -> Result<Prediction, InferenceError> {
        let probabilities = self.predict_proba(features)?;
        let index = probabilities
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| if *p > probabilities[best] { i } else { best });
        let tier = IntensityTier::from_index(index).unwrap_or(IntensityTier::Low);
        Ok(Prediction {
            tier,
            probabilities,
        })
    }
}

/// Serialized classifier, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    /// Softmax over linear class scores
    LogisticRegression(LogisticRegression),
    /// Averaged leaf distributions of decision trees
    RandomForest(RandomForest),
}

impl ClassifierModel {
    /// Check dimensions and parameter domains
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] describing the first structural problem found.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Self::LogisticRegression(model) => model.validate(),
            Self::RandomForest(model) => model.validate(),
        }
    }
}

impl IntensityClassifier for ClassifierModel {
    fn predict_proba(&self, features: &FeatureRow) -> Result<ClassProbabilities, InferenceError> {
        match self {
            Self::LogisticRegression(model) => model.predict_proba(features),
            Self::RandomForest(model) => model.predict_proba(features),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(model) => model.kind(),
            Self::RandomForest(model) => model.kind(),
        }
    }
}

/// Normalize non-negative scores into probabilities
pub(crate) fn normalize(scores: ClassProbabilities) -> Result<ClassProbabilities, InferenceError> {
    if let Some(column) = scores.iter().position(|s| !s.is_finite()) {
        return Err(InferenceError::NonFinite {
            stage: "classifier",
            column,
        });
    }
    let sum: f64 = scores.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(InferenceError::DegenerateProbabilities { sum });
    }
    Ok(scores.map(|s| s / sum))
}
