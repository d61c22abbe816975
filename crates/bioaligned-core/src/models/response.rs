// ABOUTME: Response bodies for the welcome and prediction endpoints
// ABOUTME: Shared by the axum handlers and the reqwest-based client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use super::{ConfidenceBreakdown, IntensityTier};
use crate::constants::service_names::DISPLAY_NAME;
use serde::{Deserialize, Serialize};

/// `GET /` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting naming the service
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: format!("Welcome to {DISPLAY_NAME} API"),
        }
    }
}

/// `POST /predict` success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Intensity description of the predicted tier
    pub recommendation: String,
    /// Rounded per-tier probabilities
    pub confidence: ConfidenceBreakdown,
}

impl PredictionResponse {
    /// Shape a prediction for the wire
    #[must_use]
    pub fn new(tier: IntensityTier, probabilities: [f64; 3]) -> Self {
        Self {
            recommendation: tier.description().to_owned(),
            confidence: ConfidenceBreakdown::from_probabilities(probabilities),
        }
    }

    /// Tier named by `recommendation`, if it is one of the fixed descriptions
    #[must_use]
    pub fn tier(&self) -> Option<IntensityTier> {
        IntensityTier::from_description(&self.recommendation)
    }
}
