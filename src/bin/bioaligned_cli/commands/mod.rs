// ABOUTME: Subcommand implementations for bioaligned-cli
// ABOUTME: Recommendation, local fatigue estimate, and service status commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

pub mod fatigue;
pub mod recommend;
pub mod status;
