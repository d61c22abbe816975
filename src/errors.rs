// ABOUTME: Re-exports the unified error types from bioaligned-core
// ABOUTME: Keeps `crate::errors::AppError` as the single error-mapping boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Unified Error Handling System
//!
//! `AppError` implements axum's `IntoResponse` (via the core crate's
//! `http-response` feature) and renders `{"error": "<message>"}`.

pub use bioaligned_core::errors::*;
