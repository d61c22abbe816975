// ABOUTME: Main library entry point for the BioAligned Fit recommendation API
// ABOUTME: HTTP service, configuration, logging and the client used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![deny(unsafe_code)]

//! # BioAligned Fit
//!
//! Recommends a workout intensity tier (Low, Moderate, High) from the user's
//! menstrual cycle phase and a handful of health signals. A pre-fitted scaler
//! and classifier are loaded once at startup and served behind a small HTTP API.
//!
//! ## Architecture
//!
//! - **bioaligned-core**: errors, constants and the `/predict` request/response models
//! - **bioaligned-intelligence**: fatigue heuristic, scaling, classifiers, pipeline
//! - **this crate**: configuration, logging, middleware, routes, server and HTTP client
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bioaligned_fit::config::environment::ServerConfig;
//! use bioaligned_fit::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("BioAligned Fit configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// HTTP client for the prediction API
pub mod client;

/// Configuration management
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request IDs and CORS
pub mod middleware;

/// Shared, read-only server resources
pub mod resources;

/// `HTTP` routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
