// ABOUTME: Workout intensity inference engine for cycle-aware recommendations
// ABOUTME: Fatigue estimation, fitted feature scaling, classifiers and the scoring pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![deny(unsafe_code)]

//! # BioAligned Intelligence
//!
//! Everything between a validated [`PredictionRequest`](bioaligned_core::models::PredictionRequest)
//! and a [`PredictionResponse`](bioaligned_core::models::PredictionResponse):
//!
//! - **fatigue**: the client-side fatigue heuristic
//! - **scaling**: fitted linear transforms (standard, min-max)
//! - **classifier**: multinomial logistic regression and random forest scorers
//! - **artifacts**: JSON artifact loading and shape validation
//! - **pipeline**: the immutable scaler + classifier pair used per request
//!
//! Model parameters are fitted elsewhere; nothing here learns at runtime.

/// JSON artifact loading
pub mod artifacts;
/// Intensity classifiers
pub mod classifier;
/// Inference and artifact error types
pub mod errors;
/// Fatigue heuristic from sleep, stress and prior activity
pub mod fatigue;
/// Scaler + classifier pipeline
pub mod pipeline;
/// Fitted feature scaling transforms
pub mod scaling;

pub use classifier::{ClassifierModel, IntensityClassifier, Prediction};
pub use errors::{ArtifactError, InferenceError};
pub use fatigue::{estimate_fatigue, LifestyleFactors};
pub use pipeline::RecommendationPipeline;
pub use scaling::FeatureScaler;
