// ABOUTME: Core types and constants for the BioAligned Fit recommendation API
// ABOUTME: Foundation crate with error handling, request/response models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![deny(unsafe_code)]

//! # BioAligned Core
//!
//! Foundation crate shared by the inference pipeline, the HTTP service and the
//! command-line client.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and validation errors
//! - **constants**: Field names, phase codes, intensity descriptions and client input ranges
//! - **models**: `CyclePhase`, `IntensityTier`, `PredictionRequest` and the response shape

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Prediction request/response models shared by server and client
pub mod models;
