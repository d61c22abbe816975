// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field names, phase codes, intensity descriptions and client input ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Constants module
//!
//! Constants are grouped by domain: the wire contract of `/predict`, the
//! physiological input ranges the client accepts, and service identity.

/// Fitness input ranges and per-phase hormone defaults used by the client
pub mod physiology;

/// Wire-level field names of the prediction payload
pub mod fields {
    /// Menstrual cycle phase (string)
    pub const CYCLE_PHASE: &str = "Cycle_Phase";
    /// Estimated estrogen level
    pub const ESTROGEN_LEVEL: &str = "Estrogen_Level";
    /// Estimated progesterone level
    pub const PROGESTERONE_LEVEL: &str = "Progesterone_Level";
    /// Derived fatigue level in `[0, 1]`
    pub const FATIGUE_LEVEL: &str = "Fatigue_Level";
    /// Heart rate in bpm
    pub const HEART_RATE: &str = "heart_rate";
    /// Body mass index
    pub const BMI: &str = "bmi";
    /// Planned workout duration in minutes
    pub const DURATION: &str = "duration";

    /// Required fields in validation order, which is also the feature column order
    pub const REQUIRED: [&str; 7] = [
        CYCLE_PHASE,
        ESTROGEN_LEVEL,
        PROGESTERONE_LEVEL,
        FATIGUE_LEVEL,
        HEART_RATE,
        BMI,
        DURATION,
    ];
}

/// Model shape constants
pub mod model {
    /// Number of columns in the feature vector
    pub const FEATURE_COUNT: usize = 7;
    /// Number of intensity classes produced by the classifier
    pub const CLASS_COUNT: usize = 3;
    /// Decimal places kept for confidence values
    pub const CONFIDENCE_DECIMALS: i32 = 2;
}

/// Human-readable intensity descriptions returned as `recommendation`
pub mod intensity {
    /// Class 0
    pub const LOW_DESCRIPTION: &str = "Low Intensity (Yoga, Stretching, Walking)";
    /// Class 1
    pub const MODERATE_DESCRIPTION: &str = "Moderate Intensity (Cycling, Dance, Pilates)";
    /// Class 2
    pub const HIGH_DESCRIPTION: &str = "High Intensity (HIIT, Strength Training)";
}

/// Service identity
pub mod service_names {
    /// Display name used in the welcome message and logs
    pub const DISPLAY_NAME: &str = "BioAligned Fit";
    /// Structured logging service name
    pub const BIOALIGNED_SERVER: &str = "bioaligned_fit";
}

/// HTTP endpoints
pub mod endpoints {
    /// Welcome endpoint
    pub const ROOT: &str = "/";
    /// Prediction endpoint
    pub const PREDICT: &str = "/predict";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}
