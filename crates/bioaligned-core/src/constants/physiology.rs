// ABOUTME: Physiological input ranges and per-phase hormone defaults for the client
// ABOUTME: Mirrors the ranges the recommendation form exposes to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! The service itself does not enforce these ranges; only the client does.

/// Estimated hormone levels (arbitrary units)
pub mod hormones {
    /// Lowest accepted hormone estimate
    pub const MIN_LEVEL: u32 = 10;
    /// Highest accepted hormone estimate
    pub const MAX_LEVEL: u32 = 100;
}

/// Fatigue heuristic inputs
pub mod lifestyle {
    /// Fewest hours of sleep the client accepts
    pub const MIN_SLEEP_HOURS: u32 = 3;
    /// Most hours of sleep the client accepts
    pub const MAX_SLEEP_HOURS: u32 = 10;
    /// Default hours of sleep
    pub const DEFAULT_SLEEP_HOURS: u32 = 7;
    /// Stress scale upper bound (0 = relaxed)
    pub const MAX_STRESS: u32 = 10;
    /// Default stress level
    pub const DEFAULT_STRESS: u32 = 5;

    /// Sleep hours at which the sleep deficit term vanishes
    pub const FULL_SLEEP_HOURS: f64 = 10.0;
    /// Weight of the sleep deficit term
    pub const SLEEP_WEIGHT: f64 = 0.5;
    /// Weight of the stress term
    pub const STRESS_WEIGHT: f64 = 0.4;
    /// Flat penalty for a workout the previous day
    pub const PRIOR_WORKOUT_PENALTY: f64 = 0.1;
    /// Upper clamp of the fatigue estimate
    pub const MAX_FATIGUE: f64 = 1.0;
}

/// Session vitals
pub mod vitals {
    /// Lowest heart rate the client accepts (bpm)
    pub const MIN_HEART_RATE: u32 = 100;
    /// Highest heart rate the client accepts (bpm)
    pub const MAX_HEART_RATE: u32 = 190;
    /// Default heart rate (bpm)
    pub const DEFAULT_HEART_RATE: u32 = 140;
    /// Lowest BMI the client accepts
    pub const MIN_BMI: u32 = 18;
    /// Highest BMI the client accepts
    pub const MAX_BMI: u32 = 35;
    /// Default BMI
    pub const DEFAULT_BMI: u32 = 24;
    /// Shortest planned workout (minutes)
    pub const MIN_DURATION: u32 = 20;
    /// Longest planned workout (minutes)
    pub const MAX_DURATION: u32 = 90;
    /// Default planned workout (minutes)
    pub const DEFAULT_DURATION: u32 = 45;
}
