// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven configuration for the HTTP service and model artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Configuration module for BioAligned Fit
//!
//! All settings come from environment variables, with command-line overrides
//! applied by the binaries. There is no configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
