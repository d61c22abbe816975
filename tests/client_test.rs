// ABOUTME: Integration tests for the prediction HTTP client against a live server
// ABOUTME: Checks success decoding and the separation of HTTP and connection failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use bioaligned_core::models::{CyclePhase, IntensityTier, PredictionRequest};
use bioaligned_fit::client::{ClientError, PredictionClient};
use helpers::fixtures::LiveServer;
use std::time::Duration;
use tokio::net::TcpListener;

fn luteal_request() -> PredictionRequest {
    PredictionRequest::for_phase(CyclePhase::Luteal, 60.0, 80.0, 0.85, (140.0, 24.0, 45.0))
}

#[tokio::test]
async fn test_welcome_round_trip() {
    let server = LiveServer::start().await;
    let client = PredictionClient::new(server.url()).unwrap();

    let welcome = client.welcome().await.unwrap();

    assert_eq!(welcome.message, "Welcome to BioAligned Fit API");
}

#[tokio::test]
async fn test_predict_returns_known_tier() {
    let server = LiveServer::start().await;
    let client = PredictionClient::new(server.url()).unwrap();

    let response = client.predict(&luteal_request()).await.unwrap();

    assert!(response.tier().is_some());
    assert!((response.confidence.total() - 1.0).abs() <= 0.01 + 1e-9);
}

#[tokio::test]
async fn test_client_and_router_agree_across_phases() {
    let server = LiveServer::start().await;
    let client = PredictionClient::new(server.url()).unwrap();

    for phase in CyclePhase::ALL {
        let request = PredictionRequest::for_phase(phase, 50.0, 50.0, 0.3, (140.0, 24.0, 45.0));
        let first = client.predict(&request).await.unwrap();
        let second = client.predict(&request).await.unwrap();
        assert_eq!(first, second, "{phase}");
        assert!(IntensityTier::from_description(&first.recommendation).is_some());
    }
}

#[tokio::test]
async fn test_http_error_carries_response_text() {
    let server = LiveServer::start().await;
    let client = PredictionClient::new(format!("{}/missing-prefix", server.url())).unwrap();

    let err = client.predict(&luteal_request()).await.unwrap_err();

    match &err {
        ClientError::Http { status, .. } => assert_eq!(*status, 404),
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Error: "));
}

#[tokio::test]
async fn test_validation_error_is_reported_verbatim() {
    let server = LiveServer::start().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/predict", server.url()))
        .json(&serde_json::json!({"Cycle_Phase": "Luteal"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"Missing field: Estrogen_Level"}"#
    );
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        PredictionClient::with_timeout(format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let err = client.welcome().await.unwrap_err();

    assert!(matches!(err, ClientError::Connection(_)), "{err:?}");
    assert!(err.to_string().starts_with("Connection Error: "));
}
