// ABOUTME: Helper modules for bioaligned-cli
// ABOUTME: Terminal rendering of inputs, fatigue and prediction results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

pub mod render;
