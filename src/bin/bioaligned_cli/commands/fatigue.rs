// ABOUTME: Local fatigue estimate command for bioaligned-cli
// ABOUTME: Applies the sleep, stress and prior-workout heuristic without contacting the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use crate::helpers::render;
use crate::LifestyleArgs;
use bioaligned_intelligence::{estimate_fatigue, LifestyleFactors};

/// Lifestyle inputs as the heuristic expects them
pub fn factors(args: &LifestyleArgs) -> LifestyleFactors {
    LifestyleFactors {
        sleep_hours: f64::from(args.sleep_hours),
        stress_level: f64::from(args.stress),
        worked_out_yesterday: args.worked_out_yesterday,
    }
}

/// Print the fatigue estimate
pub fn run(args: &LifestyleArgs) {
    let fatigue = estimate_fatigue(&factors(args));
    println!("{}", render::fatigue_line(fatigue));
}
