//! Small HTTP backend serving a pi approximation over JSON.
//!
//! The service exposes one application route, `GET /`, which returns a
//! freshly computed approximation of pi together with how long the
//! computation took. Requests whose `User-Agent` mentions curl are turned
//! away with a 403.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`pi`]: Pi approximation strategies
//! - [`api`]: HTTP API for the root route, health, and metrics
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pi;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
