// ABOUTME: Error types for model artifact loading and per-request inference
// ABOUTME: Convert into AppError so HTTP handlers never name them directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use bioaligned_core::errors::AppError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while scoring a single feature row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// A transform or model produced NaN or infinity
    #[error("{stage} produced a non-finite value in column {column}")]
    NonFinite {
        /// Pipeline stage ("scaler" or "classifier")
        stage: &'static str,
        /// Offending column or class index
        column: usize,
    },
    /// Class probabilities could not be normalized
    #[error("classifier produced degenerate probabilities (sum {sum})")]
    DegenerateProbabilities {
        /// Sum of the raw probabilities
        sum: f64,
    },
}

/// Failures while loading or validating a fitted artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("failed to read artifact {path}: {source}")]
    Io {
        /// Artifact location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// Artifact is not valid JSON for the expected schema
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        /// Artifact location
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
    /// A parameter array has the wrong length
    #[error("{artifact}: expected {expected} {what}, found {found}")]
    Shape {
        /// Artifact kind
        artifact: &'static str,
        /// What was measured ("mean values", "coefficient rows", ...)
        what: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        found: usize,
    },
    /// A parameter is outside its valid domain
    #[error("{artifact}: {reason}")]
    InvalidParameter {
        /// Artifact kind
        artifact: &'static str,
        /// Human-readable description
        reason: String,
    },
}

impl ArtifactError {
    pub(crate) fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            artifact,
            reason: reason.into(),
        }
    }

    pub(crate) const fn shape(
        artifact: &'static str,
        what: &'static str,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::Shape {
            artifact,
            what,
            expected,
            found,
        }
    }
}

impl From<InferenceError> for AppError {
    fn from(error: InferenceError) -> Self {
        Self::inference(error.to_string()).with_source(error)
    }
}

impl From<ArtifactError> for AppError {
    fn from(error: ArtifactError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
