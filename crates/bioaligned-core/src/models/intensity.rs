// ABOUTME: Three-way workout intensity classification and per-class confidence
// ABOUTME: Maps classifier indices to descriptions and probabilities to labelled keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use super::round_to;
use crate::constants::{intensity, model::CONFIDENCE_DECIMALS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended workout exertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityTier {
    /// Class 0
    Low,
    /// Class 1
    Moderate,
    /// Class 2
    High,
}

impl IntensityTier {
    /// Tiers in classifier output order
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    /// Tier for a classifier index
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::Moderate),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Classifier index of this tier
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }

    /// Short label used as the confidence key
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Human-readable recommendation
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => intensity::LOW_DESCRIPTION,
            Self::Moderate => intensity::MODERATE_DESCRIPTION,
            Self::High => intensity::HIGH_DESCRIPTION,
        }
    }

    /// Reverse lookup from a recommendation string
    #[must_use]
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.description() == description)
    }
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-tier probability, serialized with keys `Low`, `Moderate`, `High` in that order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    /// Probability of the low tier
    #[serde(rename = "Low")]
    pub low: f64,
    /// Probability of the moderate tier
    #[serde(rename = "Moderate")]
    pub moderate: f64,
    /// Probability of the high tier
    #[serde(rename = "High")]
    pub high: f64,
}

impl ConfidenceBreakdown {
    /// Build from classifier probabilities, rounding each to two decimals
    #[must_use]
    pub fn from_probabilities(probabilities: [f64; 3]) -> Self {
        let [low, moderate, high] = probabilities.map(|p| round_to(p, CONFIDENCE_DECIMALS));
        Self {
            low,
            moderate,
            high,
        }
    }

    /// Probability for a given tier
    #[must_use]
    pub const fn get(&self, tier: IntensityTier) -> f64 {
        match tier {
            IntensityTier::Low => self.low,
            IntensityTier::Moderate => self.moderate,
            IntensityTier::High => self.high,
        }
    }

    /// Sum of all three probabilities
    #[must_use]
    pub fn total(&self) -> f64 {
        self.low + self.moderate + self.high
    }

    /// Tier/probability pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (IntensityTier, f64)> + '_ {
        IntensityTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        for tier in IntensityTier::ALL {
            assert_eq!(IntensityTier::from_index(tier.index()), Some(tier));
        }
        assert_eq!(IntensityTier::from_index(3), None);
    }

    #[test]
    fn test_descriptions_are_fixed() {
        assert_eq!(
            IntensityTier::Low.description(),
            "Low Intensity (Yoga, Stretching, Walking)"
        );
        assert_eq!(
            IntensityTier::Moderate.description(),
            "Moderate Intensity (Cycling, Dance, Pilates)"
        );
        assert_eq!(
            IntensityTier::High.description(),
            "High Intensity (HIIT, Strength Training)"
        );
        assert_eq!(
            IntensityTier::from_description("High Intensity (HIIT, Strength Training)"),
            Some(IntensityTier::High)
        );
    }

    #[test]
    fn test_confidence_keys_and_order() {
        let confidence = ConfidenceBreakdown::from_probabilities([0.123, 0.456, 0.421]);
        let json = serde_json::to_string(&confidence).unwrap();
        assert_eq!(json, r#"{"Low":0.12,"Moderate":0.46,"High":0.42}"#);
        assert!((confidence.total() - 1.0).abs() <= 0.01);
    }
}
