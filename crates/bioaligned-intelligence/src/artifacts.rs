// ABOUTME: Loads fitted scaler and classifier artifacts from JSON files
// ABOUTME: Every artifact is validated against the fixed feature layout before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

use crate::classifier::{ClassifierModel, IntensityClassifier};
use crate::errors::ArtifactError;
use crate::scaling::FeatureScaler;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a fitted scaler
///
/// # Errors
///
/// Returns an [`ArtifactError`] if the file cannot be read or parsed, or fails validation.
pub fn load_scaler(path: &Path) -> Result<FeatureScaler, ArtifactError> {
    let scaler: FeatureScaler = read_json(path)?;
    scaler.validate()?;
    info!(path = %path.display(), kind = scaler.kind(), "Loaded feature scaler");
    Ok(scaler)
}

/// Load and validate a fitted classifier
///
/// # Errors
///
/// Returns an [`ArtifactError`] if the file cannot be read or parsed, or fails validation.
pub fn load_classifier(path: &Path) -> Result<ClassifierModel, ArtifactError> {
    let model: ClassifierModel = read_json(path)?;
    model.validate()?;
    info!(path = %path.display(), kind = model.kind(), "Loaded intensity classifier");
    Ok(model)
}
