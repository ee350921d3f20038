//! Pi backend service entry point.

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pi_backend::api::{serve, AppState};
use pi_backend::config::Config;
use pi_backend::metrics;
use pi_backend::pi::{self, PiMethod};

/// HTTP backend serving a pi approximation over JSON.
#[derive(Parser, Debug)]
#[command(name = "pi-backend")]
#[command(about = "HTTP backend serving a pi approximation over JSON")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Compute pi once with both strategies and print the results.
    ComputePi {
        /// Number of Leibniz terms (overrides LEIBNIZ_TERMS).
        #[arg(long)]
        terms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("pi_backend=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::ComputePi { terms }) => cmd_compute_pi(terms).await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Pi method: {}", config.pi_method);
    if config.pi_method == PiMethod::Leibniz {
        info!("Leibniz terms: {}", config.leibniz_terms);
    }

    // Install the Prometheus recorder and register metric descriptions
    let prometheus = PrometheusBuilder::new().install_recorder()?;
    metrics::init_metrics();

    // Create app state and serve
    let state = AppState::new(config).with_prometheus(prometheus);

    serve(state).await?;

    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PI BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Pi Method: {}", config.pi_method);
    println!("  Leibniz Terms: {}", config.leibniz_terms);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Compute pi once with both strategies and print the results.
async fn cmd_compute_pi(terms_override: Option<u64>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let terms = terms_override.unwrap_or(config.leibniz_terms);

    println!("======================================================================");
    println!("PI BACKEND - COMPUTATION CHECK");
    println!("======================================================================");

    for method in [PiMethod::Constant, PiMethod::Leibniz] {
        let result = pi::compute(method, terms);
        let error = (result.value - std::f64::consts::PI).abs();

        println!("\nMethod: {}", method);
        if method == PiMethod::Leibniz {
            println!("  Terms: {}", terms);
        }
        println!("  Value: {:.15}", result.value);
        println!("  Error vs f64 PI: {:.3e}", error);
        println!("  Duration: {:.6}s", result.duration.as_secs_f64());
    }

    println!("\n======================================================================");
    println!("COMPUTATION CHECK COMPLETE");
    println!("======================================================================");

    Ok(())
}
