// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request harness and fixtures built from the shipped artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod fixtures;
