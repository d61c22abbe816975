// ABOUTME: Output formatting helpers for bioaligned-cli
// ABOUTME: Renders the submitted inputs, fatigue estimate and confidence bars as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use bioaligned_core::models::{PredictionRequest, PredictionResponse};
use std::fmt::Write;

/// Width of a full (probability 1.0) confidence bar
const BAR_WIDTH: usize = 40;

/// Text bar proportional to a probability in `[0, 1]`
pub fn confidence_bar(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// One-line estimate as shown before the request is sent
pub fn fatigue_line(fatigue: f64) -> String {
    format!("Estimated Fatigue Level: {fatigue:.2}")
}

/// Summary of the values being submitted
pub fn inputs_summary(request: &PredictionRequest) -> String {
    format!(
        "Cycle Phase: {} | Estrogen: {} | Progesterone: {} | Heart Rate: {} bpm | BMI: {} | Duration: {} mins",
        request.phase_label(),
        request.estrogen_level,
        request.progesterone_level,
        request.heart_rate,
        request.bmi,
        request.duration,
    )
}

/// Recommendation followed by the confidence block, marking the chosen tier
pub fn recommendation(response: &PredictionResponse) -> String {
    let mut out = format!(
        "Recommended Workout: {}\n\nModel Confidence:\n",
        response.recommendation
    );
    let chosen = response.tier();
    for (tier, probability) in response.confidence.iter() {
        let marker = if chosen == Some(tier) { " <" } else { "" };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "  {:<9} {probability:>4.2} |{}|{marker}",
            tier.label(),
            confidence_bar(probability)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioaligned_core::models::IntensityTier;

    #[test]
    fn test_confidence_bar_bounds() {
        assert_eq!(confidence_bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(confidence_bar(1.0), "#".repeat(BAR_WIDTH));
        assert_eq!(confidence_bar(0.5).matches('#').count(), BAR_WIDTH / 2);
        assert_eq!(confidence_bar(1.7).len(), BAR_WIDTH);
    }

    #[test]
    fn test_recommendation_block() {
        let response = PredictionResponse::new(IntensityTier::Low, [0.82, 0.13, 0.05]);
        let text = recommendation(&response);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Recommended Workout: Low Intensity (Yoga, Stretching, Walking)"
        );
        assert_eq!(lines[2], "Model Confidence:");
        assert!(lines[3].trim_start().starts_with("Low"));
        assert!(lines[3].contains("0.82"));
        assert!(lines[3].ends_with(" <"));
        assert!(lines[4].ends_with('|'));
        assert!(lines[4].trim_start().starts_with("Moderate"));
        assert!(lines[5].trim_start().starts_with("High"));
    }

    #[test]
    fn test_fatigue_line_has_two_decimals() {
        assert_eq!(fatigue_line(0.5), "Estimated Fatigue Level: 0.50");
    }
}
