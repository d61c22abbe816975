// ABOUTME: BioAligned CLI - command-line client for the workout recommendation API
// ABOUTME: Collects cycle and health inputs, estimates fatigue locally, and renders predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors
//!
//! Usage:
//! ```bash
//! # Recommendation using phase hormone defaults
//! bioaligned-cli recommend --phase luteal --sleep-hours 6 --stress 7 --worked-out-yesterday
//!
//! # Override the estimated hormone levels
//! bioaligned-cli recommend --phase follicular --estrogen 65 --progesterone 20
//!
//! # Fatigue estimate only, no network
//! bioaligned-cli fatigue --sleep-hours 5 --stress 8
//!
//! # Check that the service answers
//! bioaligned-cli --api-url http://127.0.0.1:5000 status
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use bioaligned_core::constants::physiology::{hormones, lifestyle, vitals};
use bioaligned_core::models::CyclePhase;
use bioaligned_fit::{
    client::{PredictionClient, DEFAULT_API_URL},
    logging::LoggingConfig,
};
use clap::{value_parser, Args, Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "bioaligned-cli",
    about = "BioAligned Fit - cycle-aware workout recommendations",
    long_about = "Collects cycle phase and health inputs, estimates fatigue from lifestyle factors, and asks the BioAligned Fit API for a workout intensity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the recommendation API
    #[arg(long, global = true, env = "BIOALIGNED_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ask the API for a workout intensity recommendation
    Recommend(RecommendArgs),

    /// Print the fatigue estimate without contacting the API
    Fatigue(LifestyleArgs),

    /// Fetch the API welcome message
    Status,
}

/// Menstrual cycle phase selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PhaseArg {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

impl From<PhaseArg> for CyclePhase {
    fn from(phase: PhaseArg) -> Self {
        match phase {
            PhaseArg::Menstrual => Self::Menstrual,
            PhaseArg::Follicular => Self::Follicular,
            PhaseArg::Ovulatory => Self::Ovulatory,
            PhaseArg::Luteal => Self::Luteal,
        }
    }
}

/// Inputs to the fatigue heuristic
#[derive(Debug, Clone, Args)]
struct LifestyleArgs {
    /// Hours of sleep last night
    #[arg(
        long,
        default_value_t = lifestyle::DEFAULT_SLEEP_HOURS,
        value_parser = value_parser!(u32).range(i64::from(lifestyle::MIN_SLEEP_HOURS)..=i64::from(lifestyle::MAX_SLEEP_HOURS))
    )]
    sleep_hours: u32,

    /// Stress level (0 = relaxed, 10 = very stressed)
    #[arg(
        long,
        default_value_t = lifestyle::DEFAULT_STRESS,
        value_parser = value_parser!(u32).range(0..=i64::from(lifestyle::MAX_STRESS))
    )]
    stress: u32,

    /// Worked out yesterday
    #[arg(long)]
    worked_out_yesterday: bool,
}

/// Inputs for a full recommendation
#[derive(Debug, Clone, Args)]
struct RecommendArgs {
    /// Current cycle phase
    #[arg(long, value_enum, ignore_case = true)]
    phase: PhaseArg,

    /// Estimated estrogen level (defaults to the phase estimate)
    #[arg(
        long,
        value_parser = value_parser!(u32).range(i64::from(hormones::MIN_LEVEL)..=i64::from(hormones::MAX_LEVEL))
    )]
    estrogen: Option<u32>,

    /// Estimated progesterone level (defaults to the phase estimate)
    #[arg(
        long,
        value_parser = value_parser!(u32).range(i64::from(hormones::MIN_LEVEL)..=i64::from(hormones::MAX_LEVEL))
    )]
    progesterone: Option<u32>,

    #[command(flatten)]
    lifestyle: LifestyleArgs,

    /// Heart rate (bpm)
    #[arg(
        long,
        default_value_t = vitals::DEFAULT_HEART_RATE,
        value_parser = value_parser!(u32).range(i64::from(vitals::MIN_HEART_RATE)..=i64::from(vitals::MAX_HEART_RATE))
    )]
    heart_rate: u32,

    /// Body mass index
    #[arg(
        long,
        default_value_t = vitals::DEFAULT_BMI,
        value_parser = value_parser!(u32).range(i64::from(vitals::MIN_BMI)..=i64::from(vitals::MAX_BMI))
    )]
    bmi: u32,

    /// Planned workout duration (minutes)
    #[arg(
        long,
        default_value_t = vitals::DEFAULT_DURATION,
        value_parser = value_parser!(u32).range(i64::from(vitals::MIN_DURATION)..=i64::from(vitals::MAX_DURATION))
    )]
    duration: u32,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let outcome = match cli.command {
        Command::Fatigue(args) => {
            commands::fatigue::run(&args);
            Ok(())
        }
        Command::Recommend(args) => {
            let client = PredictionClient::new(cli.api_url)?;
            commands::recommend::run(&client, &args).await
        }
        Command::Status => {
            let client = PredictionClient::new(cli.api_url)?;
            commands::status::run(&client).await
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
