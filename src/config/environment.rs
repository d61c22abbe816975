// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Environment-based configuration management for production deployment

use crate::errors::{AppError, AppResult};
use bioaligned_core::constants::service_names;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Environment variable names and their defaults
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Classifier artifact path
    pub const MODEL_PATH: &str = "MODEL_PATH";
    /// Scaler artifact path
    pub const SCALER_PATH: &str = "SCALER_PATH";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum request body size in bytes
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// Default classifier artifact
    pub const DEFAULT_MODEL_PATH: &str = "models/workout_recommendation_model.json";
    /// Default scaler artifact
    pub const DEFAULT_SCALER_PATH: &str = "models/scaler.json";
    /// Default request timeout
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default body limit (64 KiB)
    pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the fitted artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Classifier artifact
    pub model_path: PathBuf,
    /// Scaler artifact
    pub scaler_path: PathBuf,
}

/// HTTP transport limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted body size in bytes
    pub max_body_bytes: usize,
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Artifact locations
    pub model: ModelConfig,
    /// Transport limits
    pub http: HttpConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env_keys::DEFAULT_HOST.to_owned(),
            http_port: env_keys::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            model: ModelConfig {
                model_path: PathBuf::from(env_keys::DEFAULT_MODEL_PATH),
                scaler_path: PathBuf::from(env_keys::DEFAULT_SCALER_PATH),
            },
            http: HttpConfig {
                request_timeout_secs: env_keys::DEFAULT_REQUEST_TIMEOUT_SECS,
                max_body_bytes: env_keys::DEFAULT_MAX_BODY_BYTES,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            server_name: service_names::BIOALIGNED_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Ok(Self {
            host: string_or(env_keys::HOST, &defaults.host),
            http_port: parse_or(&lookup, env_keys::HTTP_PORT, defaults.http_port)?,
            log_level: LogLevel::from_str_or_default(&string_or(env_keys::LOG_LEVEL, "info")),
            environment: Environment::from_str_or_default(&string_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            model: ModelConfig {
                model_path: lookup(env_keys::MODEL_PATH)
                    .map_or(defaults.model.model_path, PathBuf::from),
                scaler_path: lookup(env_keys::SCALER_PATH)
                    .map_or(defaults.model.scaler_path, PathBuf::from),
            },
            http: HttpConfig {
                request_timeout_secs: parse_or(
                    &lookup,
                    env_keys::REQUEST_TIMEOUT_SECS,
                    defaults.http.request_timeout_secs,
                )?,
                max_body_bytes: parse_or(
                    &lookup,
                    env_keys::MAX_BODY_BYTES,
                    defaults.http.max_body_bytes,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: string_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    &defaults.cors.allowed_origins,
                ),
            },
            server_name: defaults.server_name,
            server_version: defaults.server_version,
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "BioAligned Fit Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Model: {}\n\
             - Scaler: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes\n\
             - CORS Origins: {}\n\
             - Version: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.model.model_path.display(),
            self.model.scaler_path.display(),
            self.http.request_timeout_secs,
            self.http.max_body_bytes,
            self.cors.allowed_origins,
            self.server_version,
        )
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid value for {key}: {raw:?} ({e})"))),
    }
}
