// ABOUTME: Prediction request/response models shared by the service and the client
// ABOUTME: Cycle phases, intensity tiers, payload validation and response shaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Domain models for the `/predict` contract.

/// Menstrual cycle phases and their feature codes
pub mod cycle_phase;
/// Intensity tiers and confidence breakdown
pub mod intensity;
/// Prediction request parsing and feature assembly
pub mod request;
/// Response bodies
pub mod response;

pub use cycle_phase::{CyclePhase, HormoneEstimate};
pub use intensity::{ConfidenceBreakdown, IntensityTier};
pub use request::{FeatureRow, PredictionRequest};
pub use response::{PredictionResponse, WelcomeResponse};

/// Round to a fixed number of decimal places, ties to even
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
