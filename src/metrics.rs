//! Prometheus metrics for request counting and computation latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Requests served counter metric name.
pub const METRIC_REQUESTS_SERVED: &str = "requests_served_total";
/// Curl rejections counter metric name.
pub const METRIC_CURL_REJECTIONS: &str = "curl_rejections_total";
/// Pi computation latency metric name.
pub const METRIC_PI_COMPUTE_LATENCY: &str = "pi_compute_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_REQUESTS_SERVED,
        "Total number of root requests answered with a pi value"
    );
    describe_counter!(
        METRIC_CURL_REJECTIONS,
        "Total number of requests rejected because the User-Agent mentioned curl"
    );
    describe_histogram!(
        METRIC_PI_COMPUTE_LATENCY,
        "Pi computation latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment the served-requests counter.
pub fn inc_requests_served() {
    counter!(METRIC_REQUESTS_SERVED).increment(1);
}

/// Increment the curl-rejections counter.
pub fn inc_curl_rejections() {
    counter!(METRIC_CURL_REJECTIONS).increment(1);
}

/// Record pi computation latency.
pub fn record_pi_compute_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_PI_COMPUTE_LATENCY).record(latency_ms);
}
