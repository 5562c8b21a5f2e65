//! # footprintd entry point
//!
//! Parses command-line arguments, initializes tracing, builds the
//! application state over the built-in activity catalog, and serves the
//! Axum app.

use std::net::IpAddr;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use footprint_api::config::AppConfig;
use footprint_api::{app, AppState};

/// Carbon footprint tracker server.
///
/// Serves the estimate form at `/` and the JSON API under `/v1/`.
#[derive(Parser, Debug)]
#[command(name = "footprintd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Address to bind (overrides FOOTPRINT_BIND).
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Port to listen on (overrides FOOTPRINT_PORT).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = AppState::new();
    tracing::debug!(activities = state.catalog().len(), "catalog loaded");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
