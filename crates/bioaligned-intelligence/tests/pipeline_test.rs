// ABOUTME: Integration tests for the recommendation pipeline
// ABOUTME: Covers confidence normalization, determinism and failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bioaligned_core::errors::ErrorCode;
use bioaligned_core::models::{CyclePhase, IntensityTier, PredictionRequest};
use bioaligned_intelligence::classifier::{ClassifierModel, LogisticRegression};
use bioaligned_intelligence::{FeatureScaler, RecommendationPipeline};
use std::path::PathBuf;

/// Two-decimal rounding of three values can drift by up to 0.01 in total
const SUM_TOLERANCE: f64 = 0.01 + 1e-9;

fn pipeline() -> RecommendationPipeline {
    let scaler = FeatureScaler::standard(
        [1.5, 60.0, 35.0, 0.5, 145.0, 26.0, 55.0],
        [1.12, 25.0, 27.0, 0.22, 26.0, 4.9, 20.0],
    );
    let classifier = ClassifierModel::LogisticRegression(LogisticRegression {
        coefficients: vec![
            vec![0.15, -0.45, 0.3, 0.8, -0.2, 0.1, -0.15],
            vec![0.05, 0.02, 0.1, 0.05, 0.02, 0.02, 0.08],
            vec![-0.2, 0.43, -0.4, -0.85, 0.18, -0.12, 0.07],
        ],
        intercepts: vec![0.05, 0.25, -0.3],
    });
    RecommendationPipeline::from_models(scaler, classifier).unwrap()
}

fn request(phase: CyclePhase, fatigue: f64) -> PredictionRequest {
    let hormones = phase.default_hormones();
    PredictionRequest::for_phase(
        phase,
        f64::from(hormones.estrogen),
        f64::from(hormones.progesterone),
        fatigue,
        (140.0, 24.0, 45.0),
    )
}

#[test]
fn test_confidence_sums_to_one_across_inputs() {
    let pipeline = pipeline();
    for phase in CyclePhase::ALL {
        for step in 0..=10 {
            let fatigue = f64::from(step) / 10.0;
            let response = pipeline.recommend(&request(phase, fatigue)).unwrap();
            let total = response.confidence.total();
            assert!((total - 1.0).abs() <= SUM_TOLERANCE, "{phase} {fatigue}: {total}");
            assert!(response.tier().is_some());
        }
    }
}

#[test]
fn test_recommendation_matches_highest_confidence() {
    let pipeline = pipeline();
    let features = request(CyclePhase::Ovulatory, 0.1).feature_row();
    let prediction = pipeline.predict_features(&features).unwrap();
    let best = prediction
        .probabilities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((prediction.probabilities[prediction.tier.index()] - best).abs() < f64::EPSILON);
}

#[test]
fn test_fatigue_pushes_towards_low_intensity() {
    let pipeline = pipeline();
    let rested = pipeline
        .recommend(&request(CyclePhase::Follicular, 0.0))
        .unwrap();
    let exhausted = pipeline
        .recommend(&request(CyclePhase::Follicular, 1.0))
        .unwrap();
    assert!(exhausted.confidence.low > rested.confidence.low);
    assert_eq!(exhausted.tier(), Some(IntensityTier::Low));
}

#[test]
fn test_repeated_calls_are_identical() {
    let pipeline = pipeline();
    let luteal = request(CyclePhase::Luteal, 0.85);
    let first = pipeline.recommend(&luteal).unwrap();
    for _ in 0..25 {
        assert_eq!(pipeline.recommend(&luteal).unwrap(), first);
    }
}

#[test]
fn test_non_finite_scaling_is_an_inference_error() {
    let pipeline = pipeline();
    let mut extreme = request(CyclePhase::Luteal, 0.5);
    extreme.fatigue_level = f64::MAX;
    let error = pipeline.recommend(&extreme).unwrap_err();
    assert_eq!(error.code, ErrorCode::InferenceError);
    assert_eq!(error.http_status(), 500);
}

#[test]
fn test_shipped_artifacts_load() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models");
    let pipeline = RecommendationPipeline::load(
        &root.join("workout_recommendation_model.json"),
        &root.join("scaler.json"),
    )
    .unwrap();
    assert_eq!(pipeline.scaler_kind(), "standard");
    assert_eq!(pipeline.classifier_kind(), "logistic_regression");

    let response = pipeline
        .recommend(&request(CyclePhase::Luteal, 0.85))
        .unwrap();
    assert!((response.confidence.total() - 1.0).abs() <= SUM_TOLERANCE);
}
