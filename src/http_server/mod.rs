use std::sync::Arc;

use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::Method;
use axum::Router;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse};
use tower_http::LatencyUnit;

pub mod api;
mod config;
mod handlers;
mod state;

pub use config::Config;
pub use state::ServiceState;

use crate::forward::HttpForwarder;
use crate::keystore::ProvisionedKeys;
use crate::relay::RelayBroker;

const API_PREFIX: &str = "/api";

/// Build the full router: `/api` routes, CORS, request tracing.
pub fn router(state: ServiceState, log_level: tracing::Level) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_response(
            DefaultOnResponse::new()
                .include_headers(false)
                .level(log_level)
                .latency_unit(LatencyUnit::Micros),
        )
        .on_failure(DefaultOnFailure::new().latency_unit(LatencyUnit::Micros));

    let cors = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![ACCEPT, CONTENT_TYPE, ORIGIN])
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .nest(API_PREFIX, api::router())
        .fallback(handlers::not_found_handler)
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
}

/// Run the HTTP service until `shutdown_rx` fires.
pub async fn run(
    config: Config,
    mut shutdown_rx: watch::Receiver<()>,
) -> Result<(), HttpServerError> {
    let keys = match &config.key_file {
        Some(path) => Some(ProvisionedKeys::load(path)?),
        None => None,
    };
    let forwarder = HttpForwarder::new(config.forward_timeout)?;
    let state = ServiceState::new(
        RelayBroker::new(config.relay),
        Arc::new(forwarder),
        keys,
        shutdown_rx.clone(),
    );
    let app = router(state, config.log_level);

    tracing::info!(addr = ?config.listen_addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
        })
        .await?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    #[error("an error occurred running the HTTP server: {0}")]
    ServingFailed(#[from] std::io::Error),
    #[error("failed to set up the HTTP server: {0}")]
    Setup(#[from] crate::error::Error),
}
