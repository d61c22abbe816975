// ABOUTME: Pre-fitted linear feature scaling applied before classification
// ABOUTME: Supports standardization and min-max transforms loaded from JSON artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Feature Scaling
//!
//! Parameters are fixed at load time. A scaler is validated once, right after
//! deserialization, so `transform` only has to guard against non-finite output
//! caused by extreme request values.

use crate::errors::{ArtifactError, InferenceError};
use bioaligned_core::constants::{fields, model::FEATURE_COUNT};
use bioaligned_core::models::FeatureRow;
use serde::{Deserialize, Serialize};

const ARTIFACT: &str = "scaler";

/// A fitted column-wise linear transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`
    Standard {
        /// Column means
        mean: Vec<f64>,
        /// Column standard deviations
        scale: Vec<f64>,
        /// Column names the scaler was fitted on
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
    /// `x * scale + min`
    MinMax {
        /// Per-column offset
        min: Vec<f64>,
        /// Per-column multiplier
        scale: Vec<f64>,
        /// Column names the scaler was fitted on
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
}

impl FeatureScaler {
    /// Standardization scaler over the fixed column order
    #[must_use]
    pub fn standard(mean: FeatureRow, scale: FeatureRow) -> Self {
        Self::Standard {
            mean: mean.to_vec(),
            scale: scale.to_vec(),
            feature_names: None,
        }
    }

    /// Short name used in logs and readiness output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Standard { .. } => "standard",
            Self::MinMax { .. } => "min_max",
        }
    }

    /// Check dimensions and parameter domains
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if any vector is not seven columns long, a
    /// parameter is non-finite, a standard deviation is zero, or the recorded
    /// feature names differ from the fixed column order.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let (offset, scale, names, offset_what) = match self {
            Self::Standard {
                mean,
                scale,
                feature_names,
            } => (mean, scale, feature_names, "mean values"),
            Self::MinMax {
                min,
                scale,
                feature_names,
            } => (min, scale, feature_names, "min values"),
        };

        check_len(offset, offset_what)?;
        check_len(scale, "scale values")?;

        if let Some(column) = offset.iter().chain(scale).position(|v| !v.is_finite()) {
            return Err(ArtifactError::invalid(
                ARTIFACT,
                format!("non-finite parameter at position {column}"),
            ));
        }
        if let Some(column) = scale.iter().position(|s| *s == 0.0) {
            return Err(ArtifactError::invalid(
                ARTIFACT,
                format!("zero scale for column {}", fields::REQUIRED[column]),
            ));
        }
        if let Some(names) = names {
            if names.iter().map(String::as_str).ne(fields::REQUIRED) {
                return Err(ArtifactError::invalid(
                    ARTIFACT,
                    format!(
                        "fitted on columns {names:?}, expected {:?}",
                        fields::REQUIRED
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Apply the transform to one feature row
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::NonFinite`] if any scaled value is NaN or infinite.
    pub fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, InferenceError> {
        let mut scaled = *row;
        match self {
            Self::Standard { mean, scale, .. } => {
                for ((value, mean), scale) in scaled.iter_mut().zip(mean).zip(scale) {
                    *value = (*value - mean) / scale;
                }
            }
            Self::MinMax { min, scale, .. } => {
                for ((value, min), scale) in scaled.iter_mut().zip(min).zip(scale) {
                    *value = value.mul_add(*scale, *min);
                }
            }
        }

        match scaled.iter().position(|v| !v.is_finite()) {
            Some(column) => Err(InferenceError::NonFinite {
                stage: ARTIFACT,
                column,
            }),
            None => Ok(scaled),
        }
    }
}

fn check_len(values: &[f64], what: &'static str) -> Result<(), ArtifactError> {
    if values.len() == FEATURE_COUNT {
        Ok(())
    } else {
        Err(ArtifactError::shape(
            ARTIFACT,
            what,
            FEATURE_COUNT,
            values.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scaler() -> FeatureScaler {
        FeatureScaler::standard([1.0; 7], [2.0; 7])
    }

    #[test]
    fn test_standard_transform() {
        let scaled = unit_scaler()
            .transform(&[3.0, 1.0, -1.0, 5.0, 1.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(scaled, [1.0, 0.0, -1.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_min_max_transform() {
        let scaler: FeatureScaler = serde_json::from_value(serde_json::json!({
            "kind": "min_max",
            "min": [0.0, -0.1, -0.1, 0.0, -1.0, -0.5, -0.25],
            "scale": [0.5, 0.01, 0.01, 1.0, 0.01, 0.02, 0.01]
        }))
        .unwrap();
        scaler.validate().unwrap();
        let scaled = scaler
            .transform(&[2.0, 60.0, 80.0, 0.5, 150.0, 25.0, 50.0])
            .unwrap();
        let expected = [1.0, 0.5, 0.7, 0.5, 0.5, 0.0, 0.25];
        for (actual, expected) in scaled.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} vs {expected}");
        }
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let scaler = FeatureScaler::Standard {
            mean: vec![0.0; 6],
            scale: vec![1.0; 7],
            feature_names: None,
        };
        assert!(matches!(
            scaler.validate(),
            Err(ArtifactError::Shape {
                expected: 7,
                found: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let mut scale = [1.0; 7];
        scale[4] = 0.0;
        let error = FeatureScaler::standard([0.0; 7], scale)
            .validate()
            .unwrap_err();
        assert_eq!(error.to_string(), "scaler: zero scale for column heart_rate");
    }

    #[test]
    fn test_validate_checks_feature_names() {
        let mut names: Vec<String> = fields::REQUIRED.iter().map(|s| (*s).to_owned()).collect();
        let scaler = FeatureScaler::Standard {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
            feature_names: Some(names.clone()),
        };
        assert!(scaler.validate().is_ok());

        names.swap(0, 1);
        let scaler = FeatureScaler::Standard {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
            feature_names: Some(names),
        };
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_transform_reports_overflow() {
        let scaler = FeatureScaler::standard([0.0; 7], [1e-300; 7]);
        let error = scaler.transform(&[1e300; 7]).unwrap_err();
        assert_eq!(
            error,
            InferenceError::NonFinite {
                stage: "scaler",
                column: 0
            }
        );
    }
}
