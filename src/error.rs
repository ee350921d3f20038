//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Metrics recorder installation error.
    #[error("metrics recorder error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
