//! ReelGraph - Relay-style GraphQL API over an in-memory video catalog.
//!
//! # Usage
//!
//! ```bash
//! # Start with default config
//! reelgraph
//!
//! # Start with environment overrides
//! PORT=8080 LOG_LEVEL=debug reelgraph
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use reelgraph_core::metrics::init_metrics;
use reelgraph_core::ports::VideoStore;
use reelgraph_graphql::{ServerConfig, build_schema, serve_with_shutdown};
use reelgraph_storage::MemoryVideoStore;

/// ReelGraph CLI.
#[derive(Parser, Debug)]
#[command(name = "reelgraph")]
#[command(about = "ReelGraph - Relay-style GraphQL API over an in-memory video catalog")]
#[command(version)]
struct Cli {
    /// GraphQL server port.
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Disable the GraphiQL playground.
    #[arg(long)]
    no_playground: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_enabled =
        match format!("0.0.0.0:{}", cli.metrics_port).parse::<std::net::SocketAddr>() {
            Ok(metrics_addr) => {
                match PrometheusBuilder::new()
                    .with_http_listener(metrics_addr)
                    .install()
                {
                    Ok(()) => {
                        init_metrics();
                        true
                    }
                    Err(e) => {
                        warn!(
                            "⚠️  Failed to start metrics exporter: {}. Continuing without metrics.",
                            e
                        );
                        false
                    }
                }
            }
            Err(e) => {
                warn!(
                    "⚠️  Invalid metrics address: {}. Continuing without metrics.",
                    e
                );
                false
            }
        };

    info!("🚀 Starting ReelGraph");

    // The catalog lives for the lifetime of the process and is injected
    // into the schema, never accessed as an ambient singleton.
    let store: Arc<dyn VideoStore> = Arc::new(MemoryVideoStore::seeded());
    let schema = build_schema(store);

    let config = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: cli.port,
        enable_playground: !cli.no_playground,
    };

    info!("✅ ReelGraph ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    if metrics_enabled {
        info!("   📊 Metrics:  http://localhost:{}/metrics", cli.metrics_port);
    } else {
        info!("   📊 Metrics:  disabled");
    }
    info!("   Press Ctrl+C to stop");

    serve_with_shutdown(schema, config, shutdown_signal()).await?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
