// ABOUTME: Fatigue heuristic combining sleep deficit, stress and prior-day training
// ABOUTME: Produces the Fatigue_Level feature the client sends to the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Fatigue estimation
//!
//! ```text
//! fatigue = min(1.0, max(0, 10 - sleep)/10 * 0.5 + stress/10 * 0.4 + (0.1 if trained yesterday))
//! ```
//!
//! rounded to two decimals.

use bioaligned_core::constants::physiology::lifestyle::{
    FULL_SLEEP_HOURS, MAX_FATIGUE, MAX_STRESS, PRIOR_WORKOUT_PENALTY, SLEEP_WEIGHT, STRESS_WEIGHT,
};
use bioaligned_core::models::round_to;
use serde::{Deserialize, Serialize};

/// Raw lifestyle inputs for the fatigue heuristic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifestyleFactors {
    /// Hours slept last night
    pub sleep_hours: f64,
    /// Stress on a 0 (relaxed) to 10 (very stressed) scale
    pub stress_level: f64,
    /// Whether the user trained the previous day
    pub worked_out_yesterday: bool,
}

/// Estimate fatigue in `[0, 1]`, rounded to two decimals
#[must_use]
pub fn estimate_fatigue(factors: &LifestyleFactors) -> f64 {
    let sleep_deficit = (FULL_SLEEP_HOURS - factors.sleep_hours).max(0.0) / FULL_SLEEP_HOURS;
    let stress = factors.stress_level / f64::from(MAX_STRESS);

    let mut fatigue = sleep_deficit.mul_add(SLEEP_WEIGHT, stress * STRESS_WEIGHT);
    if factors.worked_out_yesterday {
        fatigue += PRIOR_WORKOUT_PENALTY;
    }

    round_to(fatigue.min(MAX_FATIGUE), 2)
}
