// ABOUTME: Fixtures for integration tests: shipped artifacts, server resources and payloads
// ABOUTME: Builds routers and live servers backed by the real recommendation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![allow(dead_code)]

use bioaligned_fit::{
    config::environment::ServerConfig, resources::ServerResources, server::build_router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Directory holding the shipped model artifacts
pub fn models_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models")
}

/// Configuration pointing at the shipped artifacts
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.model.model_path = models_dir().join("workout_recommendation_model.json");
    config.model.scaler_path = models_dir().join("scaler.json");
    config
}

/// Resources loaded from the shipped artifacts
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::load(test_config()).expect("shipped artifacts should load"))
}

/// Fully layered application router
pub fn test_router() -> axum::Router {
    build_router(test_resources())
}

/// Luteal-phase example payload, as documented for `POST /predict`
pub fn luteal_payload() -> Value {
    json!({
        "Cycle_Phase": "Luteal",
        "Estrogen_Level": 60,
        "Progesterone_Level": 80,
        "Fatigue_Level": 0.85,
        "heart_rate": 140,
        "bmi": 24,
        "duration": 45
    })
}

/// A server bound to an ephemeral port, shut down on drop
pub struct LiveServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl LiveServer {
    /// Start serving the full router on 127.0.0.1:0
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(bioaligned_fit::server::serve(
            listener,
            test_resources(),
            async move {
                let _ = rx.await;
            },
        ));

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    /// Base URL for clients
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for LiveServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
