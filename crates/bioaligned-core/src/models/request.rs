// ABOUTME: Prediction request model with required-field validation and feature assembly
// ABOUTME: Parses the seven-field JSON payload before any feature vector is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Prediction Request
//!
//! The payload is parsed in two steps: presence of every required field is
//! checked first (in the fixed field order), then each numeric field's JSON
//! type. Only a fully validated request can produce a [`FeatureRow`].
//!
//! `Cycle_Phase` is never rejected: any value other than a known label,
//! including non-strings and `null`, encodes as 0. Numeric ranges are not
//! enforced here.

use super::CyclePhase;
use crate::constants::{fields, model::FEATURE_COUNT};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single-row feature vector in column order
/// `[Cycle_Phase, Estrogen_Level, Progesterone_Level, Fatigue_Level, heart_rate, bmi, duration]`
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Validated `/predict` payload
///
/// `cycle_phase` keeps the raw label when the payload sent a string; unknown
/// labels and non-string values are legal and encode as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Cycle phase label, `None` when the payload value was not a string
    #[serde(rename = "Cycle_Phase")]
    pub cycle_phase: Option<String>,
    /// Estimated estrogen level
    #[serde(rename = "Estrogen_Level")]
    pub estrogen_level: f64,
    /// Estimated progesterone level
    #[serde(rename = "Progesterone_Level")]
    pub progesterone_level: f64,
    /// Fatigue estimate in `[0, 1]`
    #[serde(rename = "Fatigue_Level")]
    pub fatigue_level: f64,
    /// Heart rate (bpm)
    pub heart_rate: f64,
    /// Body mass index
    pub bmi: f64,
    /// Planned duration (minutes)
    pub duration: f64,
}

impl PredictionRequest {
    /// Parse and validate a raw request body
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedBody`] if the body is not a JSON object,
    /// otherwise the first field-level error found by [`Self::from_json`].
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ValidationError::malformed(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Validate an already-parsed JSON value
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedBody`] if `value` is not an object
    /// - [`ValidationError::MissingField`] for the first absent field, in field order
    /// - [`ValidationError::InvalidType`] for the first numeric field that is not a number
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or_else(|| {
            ValidationError::malformed(format!("expected a JSON object, found {}", kind_of(value)))
        })?;

        if let Some(missing) = fields::REQUIRED
            .into_iter()
            .find(|field| !object.contains_key(*field))
        {
            return Err(ValidationError::missing(missing));
        }

        let cycle_phase = object
            .get(fields::CYCLE_PHASE)
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self {
            cycle_phase,
            estrogen_level: number(object, fields::ESTROGEN_LEVEL)?,
            progesterone_level: number(object, fields::PROGESTERONE_LEVEL)?,
            fatigue_level: number(object, fields::FATIGUE_LEVEL)?,
            heart_rate: number(object, fields::HEART_RATE)?,
            bmi: number(object, fields::BMI)?,
            duration: number(object, fields::DURATION)?,
        })
    }

    /// Build a request from a known phase
    #[must_use]
    pub fn for_phase(
        phase: CyclePhase,
        estrogen_level: f64,
        progesterone_level: f64,
        fatigue_level: f64,
        vitals: (f64, f64, f64),
    ) -> Self {
        let (heart_rate, bmi, duration) = vitals;
        Self {
            cycle_phase: Some(phase.label().to_owned()),
            estrogen_level,
            progesterone_level,
            fatigue_level,
            heart_rate,
            bmi,
            duration,
        }
    }

    /// Phase label as sent, or `"unspecified"` for a non-string value
    #[must_use]
    pub fn phase_label(&self) -> &str {
        self.cycle_phase.as_deref().unwrap_or("unspecified")
    }

    /// Encoded phase (unknown labels and non-string values encode as 0)
    #[must_use]
    pub fn phase_code(&self) -> u8 {
        self.cycle_phase
            .as_deref()
            .map_or(CyclePhase::Menstrual.code(), CyclePhase::code_for_label)
    }

    /// Assemble the feature vector in the fixed column order
    #[must_use]
    pub fn feature_row(&self) -> FeatureRow {
        [
            f64::from(self.phase_code()),
            self.estrogen_level,
            self.progesterone_level,
            self.fatigue_level,
            self.heart_rate,
            self.bmi,
            self.duration,
        ]
    }
}

fn number(object: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    object
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(ValidationError::not_a_number(field))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
