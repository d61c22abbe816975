// ABOUTME: HTTP client for the BioAligned Fit prediction API
// ABOUTME: One request per call with a fixed timeout and no retries, used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Prediction Client
//!
//! Connection-level failures (refused, DNS, timeout) and HTTP-level failures
//! (non-success status) are separate [`ClientError`] variants, and their
//! `Display` output is what the CLI prints verbatim.

use bioaligned_core::{
    constants::endpoints,
    models::{PredictionRequest, PredictionResponse, WelcomeResponse},
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Base URL used when neither `--api-url` nor `BIOALIGNED_API_URL` is set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Whole-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures seen by the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Connection Error: {0}")]
    Connection(String),

    /// The service answered with a non-success status
    #[error("Error: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Raw response text
        body: String,
    },

    /// A success response whose body is not the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    fn connection(error: &reqwest::Error) -> Self {
        Self::Connection(error.to_string())
    }
}

/// Async client for the recommendation API
#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: String,
    client: Client,
}

impl PredictionClient {
    /// Create a client with the standard 10-second timeout
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connection`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom timeout
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connection`] if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::connection(&e))?;

        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { base_url, client })
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /`
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on connection failure, non-success status,
    /// or an unexpected body.
    pub async fn welcome(&self) -> Result<WelcomeResponse, ClientError> {
        let url = self.url(endpoints::ROOT);
        debug!(%url, "Requesting welcome message");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::connection(&e))?;

        Self::decode(response).await
    }

    /// `POST /predict`
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on connection failure, non-success status,
    /// or an unexpected body.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClientError> {
        let url = self.url(endpoints::PREDICT);
        debug!(%url, phase = request.phase_label(), "Requesting prediction");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::connection(&e))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::connection(&e))?;

        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
