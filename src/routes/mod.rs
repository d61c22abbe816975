// ABOUTME: Route module organization for the BioAligned Fit HTTP endpoints
// ABOUTME: Splits welcome/prediction routes from health and readiness probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Each domain module exposes a `routes()` constructor returning an axum
//! `Router`; the server merges them and applies middleware.

/// Health check and readiness routes
pub mod health;
/// Welcome and prediction routes
pub mod recommendation;

pub use health::HealthRoutes;
pub use recommendation::RecommendationRoutes;
