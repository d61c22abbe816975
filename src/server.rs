// ABOUTME: HTTP server assembly and lifecycle for the recommendation API
// ABOUTME: Merges route groups, applies tower middleware, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! Router construction and serving
//!
//! Layer order, outermost first: request ID, CORS, tracing, JSON rejection,
//! timeout, body limit. The request ID layer wraps everything so that even
//! timeout and body-limit rejections carry an `x-request-id` header, and the
//! JSON rejection layer gives those rejections the `{"error": ...}` body.

use crate::{
    errors::{AppError, AppResult},
    middleware::{json_rejection_middleware, request_id_middleware, setup_cors},
    resources::ServerResources,
    routes::{HealthRoutes, RecommendationRoutes},
};
use axum::{middleware, Router};
use bioaligned_core::constants::endpoints;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(RecommendationRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.request_timeout_secs,
        )))
        .layer(middleware::from_fn(json_rejection_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&config))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Serve on an already-bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an internal error if the accept loop fails.
pub async fn serve<F>(
    listener: TcpListener,
    resources: Arc<ServerResources>,
    shutdown: F,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(resources);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")).with_source(e))
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns a configuration error if the address cannot be bound, or an
/// internal error if serving fails.
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::config(format!("Failed to bind {address}: {e}")).with_source(e)
    })?;

    info!("HTTP server listening on http://{address}");
    info!("  GET  {}", endpoints::ROOT);
    info!("  POST {}", endpoints::PREDICT);
    info!("  GET  {}", endpoints::HEALTH);
    info!("  GET  {}", endpoints::READY);

    serve(listener, resources, shutdown_signal()).await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
