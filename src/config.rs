//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::pi::PiMethod;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Pi Computation ===
    /// Approximation strategy: `constant` or `leibniz`.
    #[serde(default)]
    pub pi_method: PiMethod,

    /// Number of terms summed by the Leibniz strategy.
    #[serde(default = "default_leibniz_terms")]
    pub leibniz_terms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    5000
}

fn default_leibniz_terms() -> u64 {
    1_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.leibniz_terms == 0 {
            return Err("LEIBNIZ_TERMS must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            pi_method: PiMethod::default(),
            leibniz_terms: default_leibniz_terms(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
