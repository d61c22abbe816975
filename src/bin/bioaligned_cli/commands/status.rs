// ABOUTME: Service status command for bioaligned-cli
// ABOUTME: Calls the API root and prints its welcome message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use bioaligned_fit::client::{ClientError, PredictionClient};

/// Print the welcome message from the configured API
pub async fn run(client: &PredictionClient) -> Result<(), ClientError> {
    let welcome = client.welcome().await?;
    println!("{} ({})", welcome.message, client.base_url());
    Ok(())
}
