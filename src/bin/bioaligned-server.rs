// ABOUTME: Server binary for the BioAligned Fit workout recommendation API
// ABOUTME: Loads the fitted artifacts once, then serves welcome, predict and health routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # BioAligned Fit API Server Binary
//!
//! ```bash
//! bioaligned-server --http-port 5000 \
//!     --model models/workout_recommendation_model.json \
//!     --scaler models/scaler.json
//! ```

use anyhow::{Context, Result};
use bioaligned_fit::{
    config::environment::ServerConfig, logging::LoggingConfig, resources::ServerResources,
    server,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bioaligned-server")]
#[command(about = "BioAligned Fit - cycle-aware workout intensity recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the classifier artifact path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override the scaler artifact path
    #[arg(long)]
    scaler: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(model) = args.model {
        config.model.model_path = model;
    }
    if let Some(scaler) = args.scaler {
        config.model.scaler_path = scaler;
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting BioAligned Fit API");
    info!("{}", config.summary());

    let resources = match ServerResources::load(config) {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!("Failed to load model artifacts: {e}");
            return Err(e).context("model artifacts could not be loaded");
        }
    };

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
