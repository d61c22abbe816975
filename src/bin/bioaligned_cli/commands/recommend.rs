// ABOUTME: Recommendation command for bioaligned-cli
// ABOUTME: Builds the seven-field payload from CLI inputs and renders the API response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use crate::commands::fatigue;
use crate::helpers::render;
use crate::RecommendArgs;
use bioaligned_core::models::{CyclePhase, PredictionRequest};
use bioaligned_fit::client::{ClientError, PredictionClient};
use bioaligned_intelligence::estimate_fatigue;
use tracing::debug;

/// Assemble the request, filling hormone levels from the phase when not given
pub fn build_request(args: &RecommendArgs) -> PredictionRequest {
    let phase = CyclePhase::from(args.phase);
    let defaults = phase.default_hormones();
    let estrogen = args.estrogen.unwrap_or(defaults.estrogen);
    let progesterone = args.progesterone.unwrap_or(defaults.progesterone);
    let fatigue_level = estimate_fatigue(&fatigue::factors(&args.lifestyle));

    PredictionRequest::for_phase(
        phase,
        f64::from(estrogen),
        f64::from(progesterone),
        fatigue_level,
        (
            f64::from(args.heart_rate),
            f64::from(args.bmi),
            f64::from(args.duration),
        ),
    )
}

/// Request a recommendation and print it
pub async fn run(client: &PredictionClient, args: &RecommendArgs) -> Result<(), ClientError> {
    let request = build_request(args);
    debug!(?request, "Prepared prediction request");

    println!("{}", render::inputs_summary(&request));
    println!("{}", render::fatigue_line(request.fatigue_level));
    println!();

    let response = client.predict(&request).await?;
    print!("{}", render::recommendation(&response));
    Ok(())
}
