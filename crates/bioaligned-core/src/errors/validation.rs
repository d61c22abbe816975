// ABOUTME: Typed validation errors for the prediction payload
// ABOUTME: Kept distinct from inference failures so they can map to client errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use thiserror::Error;

/// Errors raised while turning a JSON body into a `PredictionRequest`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent from the payload
    #[error("Missing field: {field}")]
    MissingField {
        /// Wire name of the missing field
        field: &'static str,
    },
    /// A field is present but carries the wrong JSON type
    #[error("Invalid field: {field} must be {expected}")]
    InvalidType {
        /// Wire name of the offending field
        field: &'static str,
        /// Expected JSON type, phrased for the message ("a number")
        expected: &'static str,
    },
    /// The body is not a JSON object
    #[error("Invalid JSON body: {details}")]
    MalformedBody {
        /// Parser or shape diagnostics
        details: String,
    },
}

impl ValidationError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an "expected a number" error
    #[must_use]
    pub const fn not_a_number(field: &'static str) -> Self {
        Self::InvalidType {
            field,
            expected: "a number",
        }
    }

    /// Create a malformed body error
    #[must_use]
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedBody {
            details: details.into(),
        }
    }
}
