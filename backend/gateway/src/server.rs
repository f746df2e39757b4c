//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use verifact_core::Verifier;

use crate::verify_api;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub verifier: Arc<dyn Verifier>,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/verify", post(verify_api::verify))
        .route("/api/health", get(verify_api::health))
        .with_state(state)
}

/// Starts the Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
