//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::metrics;
use crate::pi;

/// Greeting returned on the happy path.
pub const WELCOME_MESSAGE: &str = "Welcome to the backend service";

/// Error returned to curl clients.
pub const CURL_REJECTION: &str = "curl is not allowed for this endpoint";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<Config>,
    /// Prometheus render handle, present once the recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state from a configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            prometheus: None,
        }
    }

    /// Attach a Prometheus render handle for the /metrics endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}

/// Root response body.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Greeting message.
    pub message: &'static str,
    /// Pi approximation.
    pub pi: f64,
    /// Wall-clock seconds spent computing pi.
    pub calculation_time_seconds: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Check whether a User-Agent value identifies curl.
fn is_curl(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("curl")
}

/// Root handler. Rejects curl clients with 403, otherwise computes pi and
/// reports the value together with the computation time.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if is_curl(user_agent) {
        info!(user_agent, "Rejecting curl client");
        metrics::inc_curl_rejections();

        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: CURL_REJECTION,
            }),
        )
            .into_response();
    }

    let start = Instant::now();
    let computation = pi::compute(state.config.pi_method, state.config.leibniz_terms);
    metrics::record_pi_compute_latency(start);
    metrics::inc_requests_served();

    debug!(
        method = %state.config.pi_method,
        pi = computation.value,
        seconds = computation.duration.as_secs_f64(),
        "Computed pi"
    );

    Json(RootResponse {
        message: WELCOME_MESSAGE,
        pi: computation.value,
        calculation_time_seconds: computation.duration.as_secs_f64(),
    })
    .into_response()
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus metrics handler - renders the exposition text, or 503 when no
/// recorder was installed (unit tests build the router without one).
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed\n".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curl_detection_is_case_insensitive() {
        assert!(is_curl("curl/7.68.0"));
        assert!(is_curl("CURL/8.0"));
        assert!(is_curl("libcurl-agent/1.0"));
        assert!(!is_curl("Mozilla/5.0"));
        assert!(!is_curl(""));
    }

    #[test]
    fn app_state_starts_without_prometheus() {
        let state = AppState::new(Config::default());
        assert!(state.prometheus.is_none());
    }
}
