//! HTTP API route definitions and server loop.

use std::net::SocketAddr;

use axum::{
    http::{HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

use super::handlers::{health, prometheus_metrics, root, AppState};
use crate::utils::shutdown_signal;

/// Name of the demonstrative extra response header.
pub const EXTRA_HEADER_NAME: &str = "x-header-add";

/// Fixed value of the demonstrative extra response header.
pub const EXTRA_HEADER_VALUE: &str = "Heres is how we could add EXTRA headers";

/// Create the API router.
///
/// Every response, including the 403 rejection, carries the `X-HEADER-ADD`
/// header and the wildcard CORS origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoint
        .route("/health", get(health))
        // Metrics endpoint
        .route("/metrics", get(prometheus_metrics))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(EXTRA_HEADER_NAME),
            HeaderValue::from_static(EXTRA_HEADER_VALUE),
        ))
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to all interfaces on the configured port and serve until shutdown.
pub async fn serve(state: AppState) -> crate::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
